use gallery_core::{AutoSelectQueue, Record, RecordId, SelectionSet};
use pretty_assertions::assert_eq;

fn page(ids: impl IntoIterator<Item = RecordId>) -> Vec<Record> {
    ids.into_iter()
        .map(|id| Record {
            id,
            title: format!("Artwork {id}"),
            ..Record::default()
        })
        .collect()
}

fn ids(set: &SelectionSet) -> Vec<RecordId> {
    set.iter().collect()
}

#[test]
fn reconcile_replaces_only_current_page_ids() {
    let mut set: SelectionSet = [1, 2, 3, 20, 21].into_iter().collect();

    set.reconcile(&[1, 2, 3, 4], &[2, 4]);

    assert_eq!(ids(&set), vec![2, 4, 20, 21]);
}

#[test]
fn reconcile_with_unchanged_page_selection_is_idempotent() {
    let mut set: SelectionSet = [1, 3, 14].into_iter().collect();
    let before = set.clone();

    set.reconcile(&[1, 2, 3], &[1, 3]);
    assert_eq!(set, before);

    set.reconcile(&[1, 2, 3], &[1, 3]);
    assert_eq!(set, before);
}

#[test]
fn reconcile_deselect_all_keeps_other_pages() {
    let mut set: SelectionSet = [1, 2, 13, 14].into_iter().collect();

    set.reconcile(&[1, 2, 3], &[]);

    assert_eq!(ids(&set), vec![13, 14]);
}

#[test]
fn reconcile_select_all_adds_nothing_outside_page() {
    let mut set = SelectionSet::new();

    set.reconcile(&[1, 2, 3], &[1, 2, 3, 99]);

    assert_eq!(ids(&set), vec![1, 2, 3]);
    assert!(!set.contains(99));
}

#[test]
fn advance_with_enough_rows_selects_exactly_target() {
    let records = page(1..=12);
    let mut set = SelectionSet::new();
    let mut queue = AutoSelectQueue::new(5);

    let added = queue.advance(&records, &mut set);

    assert_eq!(added, 5);
    assert_eq!(queue.remaining(), 0);
    assert!(queue.is_idle());
    assert_eq!(ids(&set), vec![1, 2, 3, 4, 5]);
}

#[test]
fn advance_with_too_few_rows_selects_all_and_keeps_remainder() {
    let records = page(1..=12);
    let mut set = SelectionSet::new();
    let mut queue = AutoSelectQueue::new(15);

    let added = queue.advance(&records, &mut set);

    assert_eq!(added, 12);
    assert_eq!(queue.remaining(), 3);
    assert_eq!(set.len(), 12);
}

#[test]
fn advance_skips_already_selected_rows_in_page_order() {
    let records = page([7, 3, 9, 1, 5]);
    let mut set: SelectionSet = [3, 1].into_iter().collect();
    let mut queue = AutoSelectQueue::new(2);

    let added = queue.advance(&records, &mut set);

    assert_eq!(added, 2);
    assert_eq!(ids(&set), vec![1, 3, 7, 9]);
    assert!(!set.contains(5));
}

#[test]
fn advance_is_noop_when_idle_or_page_fully_selected() {
    let records = page(1..=3);
    let mut set = SelectionSet::new();
    let mut idle = AutoSelectQueue::default();
    assert_eq!(idle.advance(&records, &mut set), 0);
    assert!(set.is_empty());

    let mut full: SelectionSet = [1, 2, 3].into_iter().collect();
    let mut queue = AutoSelectQueue::new(4);
    assert_eq!(queue.advance(&records, &mut full), 0);
    assert_eq!(queue.remaining(), 4);
}

#[test]
fn selected_on_page_follows_page_order() {
    let records = page([4, 2, 8]);
    let set: SelectionSet = [8, 4, 100].into_iter().collect();

    let selected: Vec<RecordId> = set
        .selected_on_page(&records)
        .into_iter()
        .map(|record| record.id)
        .collect();

    assert_eq!(selected, vec![4, 8]);
}
