//! Integration records and the errors raised for integrations that lost authentication.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The integration field a user picked for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedField {
    pub integration_field: Option<String>,
    pub question_id: String,
}

/// Forms affected by one integration type that is not authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnauthenticatedIntegrationError {
    pub integration_type: String,
    pub integration_type_name: String,
    pub forms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub id: String,
    pub form_id: String,
    pub integration_type: String,
    pub entity_type: String,
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationType {
    pub integration_type: String,
    pub authenticated: bool,
    pub name: String,
}

/// Groups integrations whose type is known but not authenticated, one error per type.
///
/// `form_name` resolves a form id to its display name. Integrations with an unknown
/// type or an unresolvable form are skipped. Errors keep first-seen order.
pub fn collect_unauthenticated_errors<F>(
    integrations: &[Integration],
    types: &[IntegrationType],
    form_name: F,
) -> Vec<UnauthenticatedIntegrationError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut errors: Vec<UnauthenticatedIntegrationError> = Vec::new();
    for integration in integrations {
        let Some(kind) = types
            .iter()
            .find(|t| t.integration_type == integration.integration_type)
        else {
            continue;
        };
        if kind.authenticated {
            continue;
        }
        let Some(form) = form_name(&integration.form_id) else {
            continue;
        };

        match errors
            .iter_mut()
            .find(|e| e.integration_type == integration.integration_type)
        {
            Some(existing) => existing.forms.push(form),
            None => errors.push(UnauthenticatedIntegrationError {
                integration_type: integration.integration_type.clone(),
                integration_type_name: kind.name.clone(),
                forms: vec![form],
            }),
        }
    }
    errors
}
