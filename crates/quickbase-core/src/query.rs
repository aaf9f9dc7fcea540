use crate::{schema::ColumnId, Error, Result};

use std::fmt;

/// A server-side filter expression: bracketed criteria joined by AND/OR.
///
/// Renders to the wire grammar `{fid.OP.'value'}AND{...}` via `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    clauses: Vec<Clause>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Clause {
    // Ignored for the first clause.
    logic: Logic,
    field: ColumnId,
    cmp: Comparison,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Logic {
    And,
    Or,
}

impl Query {
    pub fn new(field: impl Into<ColumnId>, cmp: Comparison, value: impl Into<String>) -> Query {
        Query {
            clauses: vec![Clause {
                logic: Logic::And,
                field: field.into(),
                cmp,
                value: value.into(),
            }],
        }
    }

    pub fn and(mut self, field: impl Into<ColumnId>, cmp: Comparison, value: impl Into<String>) -> Query {
        self.clauses.push(Clause {
            logic: Logic::And,
            field: field.into(),
            cmp,
            value: value.into(),
        });
        self
    }

    pub fn or(mut self, field: impl Into<ColumnId>, cmp: Comparison, value: impl Into<String>) -> Query {
        self.clauses.push(Clause {
            logic: Logic::Or,
            field: field.into(),
            cmp,
            value: value.into(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(match clause.logic {
                    Logic::And => "AND",
                    Logic::Or => "OR",
                })?;
            }
            write!(
                f,
                "{{{}.{}.'{}'}}",
                clause.field,
                clause.cmp.wire_name(),
                clause.value
            )?;
        }
        Ok(())
    }
}

/// Comparison operators the filter grammar accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Equals
    Ex,
    /// Does not equal
    Xex,
    /// Contains
    Ct,
    /// Does not contain
    Xct,
    /// Begins with
    Sw,
    /// Does not begin with
    Xsw,
    /// Is before
    Bf,
    /// Is on or before
    Obf,
    /// Is after
    Af,
    /// Is on or after
    Oaf,
    /// Greater than
    Gt,
    /// Greater than or equal
    Gte,
    /// Less than
    Lt,
    /// Less than or equal
    Lte,
    /// Is in range
    Ir,
    /// Is not in range
    Xir,
}

impl Comparison {
    pub fn wire_name(self) -> &'static str {
        use Comparison::*;

        match self {
            Ex => "EX",
            Xex => "XEX",
            Ct => "CT",
            Xct => "XCT",
            Sw => "SW",
            Xsw => "XSW",
            Bf => "BF",
            Obf => "OBF",
            Af => "AF",
            Oaf => "OAF",
            Gt => "GT",
            Gte => "GTE",
            Lt => "LT",
            Lte => "LTE",
            Ir => "IR",
            Xir => "XIR",
        }
    }
}

/// The parsed form of the dotted options string (`skp-200.num-50.sortorder-A`).
///
/// Page size and skip offset are pulled out for the adaptive paging recovery;
/// everything else passes through untouched and in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Explicit page size (`num-<n>`), if given.
    pub num: Option<u64>,

    /// Explicit skip offset (`skp-<n>`), if given.
    pub skp: Option<u64>,

    /// Remaining options, preserved verbatim.
    pub passthrough: Vec<String>,
}

impl QueryOptions {
    pub fn parse(options: &str) -> Result<QueryOptions> {
        let mut parsed = QueryOptions::default();
        if options.is_empty() {
            return Ok(parsed);
        }
        for opt in options.split('.') {
            if let Some(n) = opt.strip_prefix("num-") {
                parsed.num = Some(parse_count(opt, n)?);
            } else if let Some(n) = opt.strip_prefix("skp-") {
                parsed.skp = Some(parse_count(opt, n)?);
            } else {
                parsed.passthrough.push(opt.to_string());
            }
        }
        Ok(parsed)
    }

    /// Renders the options with the paging directives replaced by the given
    /// skip offset and page size.
    pub fn render_page(&self, skip: u64, num: u64) -> String {
        let mut opts = self.passthrough.clone();
        opts.push(format!("skp-{skip}"));
        opts.push(format!("num-{num}"));
        opts.join(".")
    }
}

fn parse_count(opt: &str, digits: &str) -> Result<u64> {
    digits
        .parse::<u64>()
        .map_err(|_| Error::validation(format!("malformed query option `{opt}`")))
}
