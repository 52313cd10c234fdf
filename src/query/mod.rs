//! Listing query engine.
//!
//! Pure filter/sort/paginate pass over the full event collection. The caller
//! loads the collection from storage fresh for every query; nothing here is
//! cached or mutated in place beyond the working copy.

use chrono::NaiveDate;

use crate::models::Event;

/// Filter and paging parameters for a listing query.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Case-insensitive substring matched against title, description and location
    pub search: Option<String>,
    pub event_type: Option<String>,
    pub genre: Option<String>,
    pub source: Option<String>,
    /// 1-indexed page number
    pub page: usize,
    /// Items per page
    pub limit: usize,
}

/// One page of query results.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub events: Vec<Event>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Run a listing query over the full collection.
///
/// All supplied filters narrow the result with AND semantics. Results are
/// sorted newest first; an out-of-range page yields an empty slice rather
/// than an error.
pub fn run(mut events: Vec<Event>, query: &ListQuery) -> QueryResult {
    if let Some(term) = non_empty(&query.search) {
        let needle = term.to_lowercase();
        events.retain(|event| {
            event.title.to_lowercase().contains(&needle)
                || event.description.to_lowercase().contains(&needle)
                || event.location.to_lowercase().contains(&needle)
        });
    }

    if let Some(event_type) = non_empty(&query.event_type) {
        events.retain(|event| event.event_type == event_type);
    }

    if let Some(genre) = non_empty(&query.genre) {
        events.retain(|event| event.genre == genre);
    }

    if let Some(source) = non_empty(&query.source) {
        events.retain(|event| event.source == source);
    }

    // Newest first; the sort is stable so ties keep their file order.
    // Records with unparseable dates sort after all dated records.
    events.sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date)));

    let total = events.len();
    let page = query.page.max(1);
    let limit = query.limit.max(1);
    let total_pages = total.div_ceil(limit);

    let start = (page - 1).saturating_mul(limit);
    let events: Vec<Event> = events.into_iter().skip(start).take(limit).collect();

    QueryResult {
        events,
        total,
        page,
        total_pages,
        has_next: page < total_pages,
        has_prev: page > 1,
    }
}

/// Treat absent and empty filter values the same.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_event(id: &str, title: &str, date: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            date: date.to_string(),
            location: "CGV Gangnam".to_string(),
            event_type: "premiere".to_string(),
            genre: "action".to_string(),
            image: String::new(),
            source: "CGV".to_string(),
            link: String::new(),
            created_at: "2024-12-01T00:00:00.000Z".to_string(),
        }
    }

    fn sample_events() -> Vec<Event> {
        let mut premiere = create_test_event("1", "Advance Screening Night", "2024-12-20");
        premiere.description = "Preview screening with the director".to_string();

        let mut giveaway = create_test_event("2", "Poster Giveaway", "2024-12-25");
        giveaway.event_type = "giveaway".to_string();
        giveaway.genre = "romance".to_string();
        giveaway.source = "Lotte Cinema".to_string();
        giveaway.location = "Lotte Cinema Hongdae".to_string();

        let mut promo = create_test_event("3", "Review Promotion", "2024-12-30");
        promo.event_type = "promotion".to_string();
        promo.genre = "drama".to_string();
        promo.source = "Megabox".to_string();
        promo.location = "Megabox COEX".to_string();

        vec![premiere, giveaway, promo]
    }

    fn query(page: usize, limit: usize) -> ListQuery {
        ListQuery {
            page,
            limit,
            ..ListQuery::default()
        }
    }

    #[test]
    fn test_search_matches_any_text_field() {
        let mut q = query(1, 10);
        q.search = Some("DIRECTOR".to_string());

        // Term only appears in a description, and only in lowercase
        let result = run(sample_events(), &q);
        assert_eq!(result.total, 1);
        assert_eq!(result.events[0].id, "1");

        q.search = Some("hongdae".to_string());
        let result = run(sample_events(), &q);
        assert_eq!(result.total, 1);
        assert_eq!(result.events[0].id, "2");
    }

    #[test]
    fn test_filters_combine_with_and_semantics() {
        let mut q = query(1, 10);
        q.event_type = Some("giveaway".to_string());
        q.genre = Some("romance".to_string());

        let result = run(sample_events(), &q);
        assert_eq!(result.total, 1);
        assert_eq!(result.events[0].id, "2");

        // Same type but a genre no giveaway has
        q.genre = Some("drama".to_string());
        let result = run(sample_events(), &q);
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_empty_filter_values_are_ignored() {
        let mut q = query(1, 10);
        q.search = Some(String::new());
        q.event_type = Some(String::new());

        let result = run(sample_events(), &q);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let result = run(sample_events(), &query(1, 10));
        let dates: Vec<&str> = result.events.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-12-30", "2024-12-25", "2024-12-20"]);
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let mut events = sample_events();
        events.push(create_test_event("4", "Undated Event", "soon"));

        let result = run(events, &query(1, 10));
        assert_eq!(result.events.last().unwrap().id, "4");
    }

    #[test]
    fn test_pagination_scenario() {
        let result = run(sample_events(), &query(1, 2));

        assert_eq!(result.total, 3);
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.events.len(), 2);
        assert_eq!(result.events[0].date, "2024-12-30");
        assert_eq!(result.events[1].date, "2024-12-25");
        assert!(result.has_next);
        assert!(!result.has_prev);

        let result = run(sample_events(), &query(2, 2));
        assert_eq!(result.events.len(), 1);
        assert_eq!(result.events[0].date, "2024-12-20");
        assert!(!result.has_next);
        assert!(result.has_prev);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let result = run(sample_events(), &query(7, 2));
        assert_eq!(result.total, 3);
        assert_eq!(result.total_pages, 2);
        assert!(result.events.is_empty());
        assert!(!result.has_next);
        assert!(result.has_prev);
    }

    #[test]
    fn test_zero_page_and_limit_are_normalized() {
        let result = run(sample_events(), &query(0, 0));
        assert_eq!(result.page, 1);
        assert_eq!(result.events.len(), 1);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn test_empty_collection() {
        let result = run(Vec::new(), &query(1, 10));
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
        assert!(result.events.is_empty());
        assert!(!result.has_next);
        assert!(!result.has_prev);
    }
}
