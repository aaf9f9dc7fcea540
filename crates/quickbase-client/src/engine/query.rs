//! The adaptive query executor.
//!
//! A read is first issued exactly as given. Three server-imposed limits are
//! recovered from without surfacing to the caller: an over-complex filter is
//! split along its OR-chain, an oversized or timed-out view is re-fetched in
//! adaptively sized pages, and a rate limit blocks until the server's resume
//! time. Any other fault propagates unchanged.

use crate::{Select, Table};

use quickbase_core::{
    driver::operation,
    query::QueryOptions,
    Error, Result,
};

use chrono::{DateTime, Utc};

/// The server rejects filters past this many criteria per call.
const MAX_CRITERIA_PER_CALL: usize = 99;

/// OR-chains below this length are not worth splitting; the fault is treated
/// as fatal instead.
const MIN_SPLITTABLE_CLAUSES: usize = 100;

/// Clause separator in a rendered OR-chain.
const OR_SEPARATOR: &str = "}OR{";

impl Table {
    /// Executes a read, replacing the working set with the matching records.
    pub fn query(&mut self, select: Select) -> Result<()> {
        self.records.clear();
        let op = select.into_operation(&self.dbid);
        self.run_query(op)
    }

    /// Executes a read, appending the matching records to the working set.
    pub fn query_append(&mut self, select: Select) -> Result<()> {
        let op = select.into_operation(&self.dbid);
        self.run_query(op)
    }

    fn run_query(&mut self, op: operation::Query) -> Result<()> {
        match self.transport.execute(op.clone().into()) {
            Ok(response) => {
                let page = response.into_page()?;
                // Always refresh the schema: a concurrent actor may have
                // altered the table, or a previous query may have seen a
                // narrower column subset.
                self.load_schema_fragment(page.schema)?;
                self.load_records(page.records)
            }
            Err(err) if err.is_filter_too_complex() => self.split_or_query(op, err),
            Err(err) if err.is_view_too_large() || err.is_operation_timeout() => {
                self.paged_query(op)
            }
            Err(err) => Err(err),
        }
    }

    /// Recovery for a filter past the criteria-count limit: when the filter
    /// is a flat OR-chain it is re-issued in groups of at most
    /// [`MAX_CRITERIA_PER_CALL`] clauses. Anything else rethrows the original
    /// fault.
    fn split_or_query(&mut self, op: operation::Query, err: Error) -> Result<()> {
        let Some(filter) = op.query.as_deref() else {
            return Err(err);
        };
        if contains_and(filter) {
            return Err(err);
        }

        let mut clauses: Vec<&str> = filter.split(OR_SEPARATOR).collect();
        if clauses.len() < MIN_SPLITTABLE_CLAUSES {
            return Err(err);
        }

        // The separator split leaves the chain's outer braces on the first
        // and last clauses.
        if let Some(first) = clauses.first_mut() {
            if let Some(trimmed) = first.strip_prefix('{') {
                *first = trimmed;
            }
        }
        if let Some(last) = clauses.last_mut() {
            if let Some(trimmed) = last.strip_suffix('}') {
                *last = trimmed;
            }
            if let Some(trimmed) = last.strip_suffix("}OR") {
                *last = trimmed;
            }
        }

        tracing::debug!(clauses = clauses.len(), "splitting OR-chain filter");

        for (index, group) in clauses.chunks(MAX_CRITERIA_PER_CALL).enumerate() {
            let mut group_op = operation::Query::new(&op.dbid);
            group_op.query = Some(format!("{{{}}}", group.join(OR_SEPARATOR)));
            group_op.clist = op.clist.clone();
            group_op.options = op.options.clone();

            let page = self.transport.execute(group_op.into())?.into_page()?;
            // Later groups are assumed to return the same columns.
            if index == 0 {
                self.load_schema_fragment(page.schema)?;
            }
            self.load_records(page.records)?;
        }
        Ok(())
    }

    /// Recovery for an oversized view or an exceeded time budget: fetch the
    /// result in pages, halving the stride whenever a page is still too
    /// large.
    fn paged_query(&mut self, op: operation::Query) -> Result<()> {
        let opts = QueryOptions::parse(op.options.as_deref().unwrap_or(""))?;
        let base_skip = opts.skp.unwrap_or(0);

        let mut total = opts.num.unwrap_or(0);
        if total == 0 {
            let count_op = operation::QueryCount {
                dbid: op.dbid.clone(),
                query: op.query.clone(),
                qid: None,
            };
            total = self.transport.execute(count_op.into())?.into_count()?;
        }

        let mut stride = total / 2;
        let mut fetched = 0;
        while fetched < total {
            let mut page_op = operation::Query::new(&op.dbid);
            page_op.query = op.query.clone();
            page_op.clist = op.clist.clone();
            page_op.options = Some(opts.render_page(base_skip + fetched, stride));

            match self.transport.execute(page_op.into()) {
                Ok(response) => {
                    let page = response.into_page()?;
                    if fetched == 0 {
                        self.load_schema_fragment(page.schema)?;
                    }
                    self.load_records(page.records)?;
                    fetched += stride;
                }
                // Same offset, half the stride. There is no stride floor; a
                // server that keeps rejecting a single-record page keeps this
                // loop spinning.
                Err(err) if err.is_view_too_large() => {
                    stride /= 2;
                    tracing::debug!(stride, "page still too large, halving stride");
                }
                Err(err) if err.is_rate_limited() => {
                    if let Some(retry_at) = err.retry_at() {
                        tracing::warn!(%retry_at, "rate limited, blocking until resume time");
                        wait_until(retry_at);
                    }
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }
}

/// Structural check that a filter is a flat disjunction: any AND joining two
/// bracketed clauses disqualifies it.
fn contains_and(filter: &str) -> bool {
    [")AND(", ")AND{", "}AND(", "}AND{"]
        .iter()
        .any(|pattern| filter.contains(pattern))
}

fn wait_until(retry_at: DateTime<Utc>) {
    // A resume time already in the past yields a negative delta; skip the
    // sleep and retry immediately.
    if let Ok(wait) = (retry_at - Utc::now()).to_std() {
        std::thread::sleep(wait);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_between_clauses_is_detected() {
        assert!(contains_and("{6.EX.'a'}AND{7.EX.'b'}"));
        assert!(contains_and("(6.EX.'a')AND(7.EX.'b')"));
        assert!(contains_and("{6.EX.'a'}AND(7.EX.'b')"));
    }

    #[test]
    fn and_inside_a_value_is_not_structural() {
        assert!(!contains_and("{6.CT.'salt AND pepper'}"));
        assert!(!contains_and("{6.EX.'a'}OR{7.EX.'b'}"));
    }
}
