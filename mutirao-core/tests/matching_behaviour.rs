//! Behavioural coverage for matching users against the latest impact.
//!
//! These tests drive the public [`Matcher`] API end to end over canned
//! sources, covering the reference ranking scenario, upstream failure
//! propagation, and the empty-user-list contract.

use std::cell::RefCell;
use std::sync::Arc;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use mutirao_core::{
    ImpactRecord, ImpactSource, MatchError, MatchReport, Matcher, SourceError, UserRecord,
    UserSource, Vocabulary,
};

/// Canned `UserSource` for scenarios.
#[derive(Debug, Clone)]
struct CannedUsers(Result<Vec<UserRecord>, SourceError>);

impl UserSource for CannedUsers {
    fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        self.0.clone()
    }
}

/// Canned `ImpactSource` for scenarios.
#[derive(Debug, Clone)]
struct CannedImpact(Result<ImpactRecord, SourceError>);

impl ImpactSource for CannedImpact {
    fn fetch_latest_impact(&self) -> Result<ImpactRecord, SourceError> {
        self.0.clone()
    }
}

/// Result cell holding the outcome of a matching run.
type ResultCell = RefCell<Option<Result<MatchReport, MatchError>>>;

#[fixture]
fn users() -> RefCell<Option<CannedUsers>> {
    RefCell::new(None)
}

#[fixture]
fn impacts() -> RefCell<Option<CannedImpact>> {
    RefCell::new(None)
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(None)
}

fn test_vocabulary() -> Arc<Vocabulary> {
    Arc::new(
        Vocabulary::new(
            vec!["A".into(), "B".into()],
            vec!["X".into(), "Y".into()],
        )
        .expect("valid test vocabulary"),
    )
}

fn user(id: &str, biomes: &[&str], communities: &[&str]) -> UserRecord {
    UserRecord {
        id: Some(id.into()),
        email: Some(format!("{id}@example.com")),
        biome_themes: biomes.iter().map(|&s| s.into()).collect(),
        community_themes: communities.iter().map(|&s| s.into()).collect(),
    }
}

// --- Given steps ---

#[given("an impact touching biome A and community X")]
fn impact_a_x(#[from(impacts)] impacts: &RefCell<Option<CannedImpact>>) {
    *impacts.borrow_mut() = Some(CannedImpact(Ok(ImpactRecord {
        id: Some("imp-1".into()),
        biomes: vec!["A".into()],
        affected_communities: vec!["X".into()],
    })));
}

#[given("an unreachable impacts feed")]
fn impact_unreachable(#[from(impacts)] impacts: &RefCell<Option<CannedImpact>>) {
    *impacts.borrow_mut() = Some(CannedImpact(Err(SourceError::Network {
        url: "http://feeds.example/impacts".into(),
        message: "connection refused".into(),
    })));
}

#[given("three users with varying theme overlap")]
fn three_users(#[from(users)] users: &RefCell<Option<CannedUsers>>) {
    *users.borrow_mut() = Some(CannedUsers(Ok(vec![
        user("u1", &["A"], &["X"]),
        user("u2", &["B"], &[]),
        user("u3", &[], &["X"]),
    ])));
}

#[given("an empty user feed")]
fn empty_users(#[from(users)] users: &RefCell<Option<CannedUsers>>) {
    *users.borrow_mut() = Some(CannedUsers(Ok(Vec::new())));
}

// --- When steps ---

#[when("I match users against the latest impact")]
fn run_matching(
    #[from(users)] users: &RefCell<Option<CannedUsers>>,
    #[from(impacts)] impacts: &RefCell<Option<CannedImpact>>,
    #[from(result)] result: &ResultCell,
) {
    let user_source = users.borrow().clone().expect("users must be initialised");
    let impact_source = impacts
        .borrow()
        .clone()
        .expect("impacts must be initialised");
    let matcher = Matcher::new(test_vocabulary(), user_source, impact_source);
    *result.borrow_mut() = Some(matcher.match_latest_impact());
}

// --- Then steps ---

#[then("the users are ranked nearest first")]
fn then_ranked(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let report = borrowed
        .as_ref()
        .expect("matching must have run")
        .as_ref()
        .expect("expected a successful run");

    assert_eq!(report.impact_id.as_deref(), Some("imp-1"));
    let ranked: Vec<_> = report
        .nearest_neighbors
        .iter()
        .map(|n| (n.id.as_deref(), n.distance))
        .collect();
    // u2 mismatches in three dimensions: sqrt(3) rounds to 1.7321.
    assert_eq!(
        ranked,
        vec![(Some("u1"), 0.0), (Some("u3"), 1.0), (Some("u2"), 1.7321)]
    );
}

#[then("the run fails with an impact error and no neighbour list")]
fn then_impact_error(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let outcome = borrowed.as_ref().expect("matching must have run");
    assert!(
        matches!(outcome, Err(MatchError::Impact(_))),
        "expected an impact error, got {outcome:?}"
    );
}

#[then("the run fails because no users are available")]
fn then_no_users(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let outcome = borrowed.as_ref().expect("matching must have run");
    assert!(
        matches!(outcome, Err(MatchError::NoUsers)),
        "expected a no-users error, got {outcome:?}"
    );
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/match_latest_impact.feature", name = $title)]
        fn $fn_name(
            users: RefCell<Option<CannedUsers>>,
            impacts: RefCell<Option<CannedImpact>>,
            result: ResultCell,
        ) {
            let _ = (users, impacts, result);
        }
    };
}

register_scenario!(
    ranking_users_by_distance,
    "ranking users by distance to the impact vector"
);
register_scenario!(
    propagating_impact_failure,
    "propagating an impact fetch failure"
);
register_scenario!(rejecting_empty_user_list, "rejecting an empty user list");
