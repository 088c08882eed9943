use crate::domain::{DateRange, FilterCriteria, PeriodError, RefuelingEvent};
use crate::errors::Result;

/// Query handed to the record collaborator, built through the period guard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQuery {
    pub criteria: FilterCriteria,
}

impl EventQuery {
    /// Builds a query after validating the requested period bounds.
    ///
    /// A rejected period means no query exists and nothing gets fetched;
    /// the caller surfaces the reason to the user.
    pub fn build(
        mut criteria: FilterCriteria,
        start: Option<&str>,
        end: Option<&str>,
    ) -> std::result::Result<Self, PeriodError> {
        criteria.period = DateRange::from_bounds(start, end)?;
        Ok(Self { criteria })
    }
}

/// One page of refueling events from the record collaborator.
#[derive(Debug, Clone, Default)]
pub struct EventPage {
    pub events: Vec<RefuelingEvent>,
    pub page: u32,
    pub total_pages: u32,
}

/// Paginated record collaborator boundary.
///
/// Implementations live outside this crate (the console's record service);
/// tests use an in-memory fake.
pub trait RefuelingRecords {
    fn fetch_page(&self, query: &EventQuery, page: u32) -> Result<EventPage>;

    /// Walks every page of the query into one snapshot.
    fn fetch_all(&self, query: &EventQuery) -> Result<Vec<RefuelingEvent>> {
        let mut events = Vec::new();
        let mut page = 0;
        loop {
            let fetched = self.fetch_page(query, page)?;
            let total_pages = fetched.total_pages;
            events.extend(fetched.events);
            page += 1;
            if page >= total_pages {
                break;
            }
        }
        Ok(events)
    }
}
