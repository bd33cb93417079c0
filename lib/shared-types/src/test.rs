use std::collections::HashSet;

use super::{ClaGroupId, GithubOrganizationId};

#[test]
fn test_organization_id_serializes_transparently() {
    let id = GithubOrganizationId::from("orgA");

    assert_eq!(serde_json::to_string(&id).unwrap(), "\"orgA\"");
    assert_eq!(
        serde_json::from_str::<GithubOrganizationId>("\"orgA\"").unwrap(),
        id
    );
}

#[test]
fn test_organization_id_comparison_is_case_sensitive() {
    let id: GithubOrganizationId = "OrgX".parse().unwrap();

    assert!(id == *"OrgX");
    assert!(id != *"orgx");
}

#[test]
fn test_organization_id_set_lookup_by_str() {
    let ids: HashSet<GithubOrganizationId> = ["orgA", "orgB"].into_iter().map(Into::into).collect();

    assert!(ids.contains("orgA"));
    assert!(!ids.contains("orgC"));
}

#[test]
fn test_cla_group_id_display() {
    let id = ClaGroupId::from("G1".to_string());

    assert_eq!(id.to_string(), "G1");
    assert_eq!(id.as_str(), "G1");
    assert_eq!(String::from(id), "G1");
}
