/// Organization visible to the authenticated user. Never persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExternalOrganization {
    pub login: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct OrganizationPage {
    pub organizations: Vec<ExternalOrganization>,
    pub has_more: bool,
}
