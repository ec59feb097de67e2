use crate::ListBroadcastsQuery;

#[test]
fn given_no_limit_when_resolving_then_defaults_to_fifty() {
    assert_eq!(ListBroadcastsQuery::default().effective_limit(), 50);
}

#[test]
fn given_out_of_range_limits_when_resolving_then_clamped() {
    let zero = ListBroadcastsQuery { limit: Some(0) };
    let huge = ListBroadcastsQuery { limit: Some(10_000) };

    assert_eq!(zero.effective_limit(), 1);
    assert_eq!(huge.effective_limit(), 200);
}
