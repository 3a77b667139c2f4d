//! Pagination bookkeeping for one listing.

/// Page counter, in-flight guard and generation of one listing view.
///
/// Every tab switch starts a new generation. Completions carry the
/// generation they were started under and are ignored once it is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    page: u32,
    in_flight: bool,
    generation: u64,
    exhausted: bool,
}

/// Proof that an append was started; handed back on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendTicket {
    pub generation: u64,
    pub page: u32,
}

/// Why an append trigger did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendBlocked {
    InFlight,
    Exhausted,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationCursor {
    #[must_use]
    pub const fn new() -> Self {
        Self { page: 1, in_flight: false, generation: 0, exhausted: false }
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn exhausted(&self) -> bool {
        self.exhausted
    }

    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Starts a new generation back on page 1 and returns its number.
    /// An append still in flight becomes stale.
    pub fn begin_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.page = 1;
        self.in_flight = false;
        self.exhausted = false;
        self.generation
    }

    /// Marks whether the first page of the current generation said more exist.
    pub fn set_has_more(&mut self, has_more: bool) {
        self.exhausted = !has_more;
    }

    /// Claims the next page, unless one is already being fetched or there are
    /// no more pages.
    ///
    /// # Errors
    /// Returns the reason the append cannot start.
    pub fn try_begin_append(&mut self) -> Result<AppendTicket, AppendBlocked> {
        if self.in_flight {
            return Err(AppendBlocked::InFlight);
        }
        if self.exhausted {
            return Err(AppendBlocked::Exhausted);
        }
        self.in_flight = true;
        self.page = self.page.saturating_add(1);
        Ok(AppendTicket { generation: self.generation, page: self.page })
    }

    /// Settles an append. Returns `false` and leaves the cursor alone when the
    /// ticket belongs to an older generation.
    ///
    /// `outcome` is `Some(has_more)` on success; on failure (`None`) the page
    /// number is handed back so the next trigger asks for the same page.
    pub fn finish_append(&mut self, ticket: AppendTicket, outcome: Option<bool>) -> bool {
        if !self.is_current(ticket.generation) {
            return false;
        }
        self.in_flight = false;
        match outcome {
            Some(has_more) => self.exhausted = !has_more,
            None => self.page = ticket.page.saturating_sub(1).max(1),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_page_one() {
        let cursor = PaginationCursor::new();
        assert_eq!(cursor.page(), 1);
        assert!(!cursor.in_flight());
        assert!(!cursor.exhausted());
    }

    #[test]
    fn second_append_is_rejected_while_first_in_flight() {
        let mut cursor = PaginationCursor::new();
        let ticket = cursor.try_begin_append().unwrap();
        assert_eq!(ticket.page, 2);
        assert_eq!(cursor.try_begin_append(), Err(AppendBlocked::InFlight));

        assert!(cursor.finish_append(ticket, Some(true)));
        let next = cursor.try_begin_append().unwrap();
        assert_eq!(next.page, 3);
    }

    #[test]
    fn failure_hands_the_page_back() {
        let mut cursor = PaginationCursor::new();
        let ticket = cursor.try_begin_append().unwrap();
        assert!(cursor.finish_append(ticket, None));
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.try_begin_append().unwrap().page, 2);
    }

    #[test]
    fn last_page_exhausts_until_next_generation() {
        let mut cursor = PaginationCursor::new();
        let ticket = cursor.try_begin_append().unwrap();
        assert!(cursor.finish_append(ticket, Some(false)));
        assert_eq!(cursor.try_begin_append(), Err(AppendBlocked::Exhausted));

        cursor.begin_generation();
        assert!(cursor.try_begin_append().is_ok());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut cursor = PaginationCursor::new();
        let stale = cursor.try_begin_append().unwrap();
        let generation = cursor.begin_generation();
        assert_eq!(cursor.page(), 1);

        let fresh = cursor.try_begin_append().unwrap();
        assert!(!cursor.finish_append(stale, Some(false)));
        assert!(cursor.in_flight());
        assert!(!cursor.exhausted());
        assert_eq!(fresh.generation, generation);
        assert!(cursor.finish_append(fresh, Some(true)));
    }
}
