use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OrganizeRequest {
    pub text: String,
}
