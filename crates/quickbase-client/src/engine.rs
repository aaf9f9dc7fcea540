mod query;
mod reconcile;
