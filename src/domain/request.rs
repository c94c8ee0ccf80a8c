//! Boundary request types, validated once before any remote call.

use crate::error::ValidationError;

/// A request to provision a tenant workspace.
///
/// All fields must be non-empty; validation happens exactly once, at the
/// boundary, before the first remote call is issued.
#[derive(Debug, Clone)]
pub struct ProvisionRequest {
    /// Name of the project (and its catalog repo).
    pub project_name: String,
    /// Requested namespace name, forwarded to the workspace service.
    pub namespace: String,
    /// Directory username to bind to the project.
    pub username: String,
    /// Raw plan string; parsed into a [`Plan`](crate::domain::Plan) exactly once.
    pub plan: String,
    /// Caller identity credentials, passed through untouched.
    pub credentials: Credentials,
}

/// Opaque caller credentials carried with a provision request.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub id_token: String,
    pub refresh_token: String,
}

impl ProvisionRequest {
    /// Check that every required field is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::required("projectName", &self.project_name)?;
        Self::required("plan", &self.plan)?;
        Self::required("username", &self.username)?;
        Self::required("id_token", &self.credentials.id_token)?;
        Self::required("refresh_token", &self.credentials.refresh_token)?;
        Self::required("namespace", &self.namespace)?;
        Ok(())
    }

    fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            Err(ValidationError::MissingField { field })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> ProvisionRequest {
        ProvisionRequest {
            project_name: "acme".into(),
            namespace: "acme-ns".into(),
            username: "alice".into(),
            plan: "Pro".into(),
            credentials: Credentials {
                id_token: "id".into(),
                refresh_token: "refresh".into(),
            },
        }
    }

    #[test]
    fn complete_request_passes() {
        assert!(complete_request().validate().is_ok());
    }

    #[test]
    fn each_missing_field_is_named() {
        let cases: [(&str, fn(&mut ProvisionRequest)); 6] = [
            ("projectName", |r| r.project_name.clear()),
            ("plan", |r| r.plan.clear()),
            ("username", |r| r.username.clear()),
            ("id_token", |r| r.credentials.id_token.clear()),
            ("refresh_token", |r| r.credentials.refresh_token.clear()),
            ("namespace", |r| r.namespace.clear()),
        ];
        for (field, clear) in cases {
            let mut request = complete_request();
            clear(&mut request);
            assert_eq!(
                request.validate().unwrap_err(),
                ValidationError::MissingField { field },
            );
        }
    }
}
