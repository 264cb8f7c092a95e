//! Per-kind reconciliation steps shared by `replace` and `merge`.

use crate::collections::ordered_set::{Keyed, OrderedSet};
use crate::error::ModelResult;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Entity counts touched by one reconciliation call.
///
/// The root is not counted; it always exists and is always updated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub added: usize,
    pub updated: usize,
    pub removed: usize,
}

impl SyncSummary {
    pub fn is_noop(&self) -> bool {
        self.added == 0 && self.updated == 0 && self.removed == 0
    }
}

impl Display for SyncSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "added={} updated={} removed={}",
            self.added, self.updated, self.removed
        )
    }
}

/// Narrows `set` to the entities named by `records`.
///
/// Every surviving entity first gets `retain_children` applied with its
/// incoming record. Records with no live entity are skipped here; the add
/// phase constructs them. Returns how many entities were dropped.
pub(crate) fn prune_to_incoming<V, R>(
    set: &RefCell<OrderedSet<Rc<V>>>,
    records: &[R],
    guid_of: impl Fn(&R) -> &str,
    mut retain_children: impl FnMut(&V, &R),
) -> usize
where
    V: Keyed,
{
    let mut surviving = Vec::with_capacity(records.len());
    for record in records {
        let guid = guid_of(record);
        let existing = set.borrow().value_for(guid).cloned();
        if let Some(model) = existing {
            retain_children(&model, record);
            surviving.push(guid);
        }
    }
    let removed = set.borrow_mut().retain_ids(surviving);
    removed.len()
}

/// Updates live entities through `update` and appends new ones from `build`.
///
/// `set` is never borrowed while `update` runs, so notifications fired from
/// it may read the aggregate. Stops at the first failing record; earlier
/// records stay applied.
pub(crate) fn upsert_all<V, R>(
    set: &RefCell<OrderedSet<Rc<V>>>,
    records: &[R],
    guid_of: impl Fn(&R) -> &str,
    mut update: impl FnMut(&V, &R) -> ModelResult<()>,
    build: impl Fn(&R) -> ModelResult<V>,
    summary: &mut SyncSummary,
) -> ModelResult<()>
where
    V: Keyed,
{
    for record in records {
        let existing = set.borrow().value_for(guid_of(record)).cloned();
        match existing {
            Some(model) => {
                update(&model, record)?;
                summary.updated += 1;
            }
            None => {
                let model = Rc::new(build(record)?);
                set.borrow_mut().add(model);
                summary.added += 1;
            }
        }
    }
    Ok(())
}
