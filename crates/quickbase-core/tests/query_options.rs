use quickbase_core::query::{Comparison, Query, QueryOptions};

use pretty_assertions::assert_eq;

#[test]
fn filters_render_the_bracketed_wire_grammar() {
    let query = Query::new(6u32, Comparison::Ex, "alpha")
        .or(7u32, Comparison::Ct, "beta")
        .and(8u32, Comparison::Gt, "5");
    assert_eq!(
        query.to_string(),
        "{6.EX.'alpha'}OR{7.CT.'beta'}AND{8.GT.'5'}"
    );
}

#[test]
fn paging_directives_are_parsed_out() {
    let opts = QueryOptions::parse("skp-200.num-50.sortorder-A").unwrap();
    assert_eq!(opts.skp, Some(200));
    assert_eq!(opts.num, Some(50));
    assert_eq!(opts.passthrough, vec!["sortorder-A".to_string()]);
}

#[test]
fn empty_options_parse_to_defaults() {
    assert_eq!(QueryOptions::parse("").unwrap(), QueryOptions::default());
}

#[test]
fn malformed_directives_are_rejected() {
    let err = QueryOptions::parse("num-many").unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn rendering_replaces_the_paging_directives() {
    let opts = QueryOptions::parse("sortorder-A.skp-10.num-20").unwrap();
    assert_eq!(opts.render_page(30, 5), "sortorder-A.skp-30.num-5");
}

#[test]
fn rendering_without_passthrough_is_just_the_directives() {
    assert_eq!(QueryOptions::default().render_page(0, 8), "skp-0.num-8");
}
