use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::store::NoteStore;

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        let response: AnkiResponse<u32> = self.invoke("version", json!({})).await?;
        response.into_result()
    }

    /// Deck names mapped to their ids
    pub async fn deck_names_and_ids(&self) -> Result<HashMap<String, u64>> {
        let response: AnkiResponse<HashMap<String, u64>> =
            self.invoke("deckNamesAndIds", json!({})).await?;
        response.into_result()
    }

    /// Model (note type) names mapped to their ids
    pub async fn model_names_and_ids(&self) -> Result<HashMap<String, u64>> {
        let response: AnkiResponse<HashMap<String, u64>> =
            self.invoke("modelNamesAndIds", json!({})).await?;
        response.into_result()
    }

    /// Field names of a model, in order
    pub async fn model_field_names(&self, model: &str) -> Result<Vec<String>> {
        let response: AnkiResponse<Vec<String>> = self
            .invoke("modelFieldNames", json!({ "modelName": model }))
            .await?;
        response.into_result()
    }

    /// Invoke an AnkiConnect API action
    async fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<AnkiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to AnkiConnect")?;

        response
            .json::<AnkiResponse<T>>()
            .await
            .context("Failed to parse AnkiConnect response")
    }
}

#[async_trait]
impl NoteStore for AnkiConnectClient {
    async fn find_duplicates(&self, model_name: &str, first_field: &str) -> Result<Vec<u64>> {
        let field_names = self.model_field_names(model_name).await?;
        let first_name = field_names
            .first()
            .with_context(|| format!("model '{}' has no fields", model_name))?;

        let query = duplicate_query(model_name, first_name, first_field);
        tracing::debug!("Duplicate query: {}", query);

        let response: AnkiResponse<Vec<u64>> =
            self.invoke("findNotes", json!({ "query": query })).await?;
        response.into_result()
    }

    async fn resolve_model_id(&self, name: &str) -> Result<u64> {
        self.model_names_and_ids()
            .await?
            .get(name)
            .copied()
            .with_context(|| format!("model '{}' is not found", name))
    }

    async fn resolve_deck_id(&self, name: &str) -> Result<u64> {
        self.deck_names_and_ids()
            .await?
            .get(name)
            .copied()
            .with_context(|| format!("deck '{}' is not found", name))
    }

    async fn add_note(
        &self,
        model_id: u64,
        deck_id: u64,
        fields: &[String],
        tags: &[String],
    ) -> Result<bool> {
        let model = name_for_id(&self.model_names_and_ids().await?, model_id)
            .with_context(|| format!("model id {} is not found", model_id))?;
        let deck = name_for_id(&self.deck_names_and_ids().await?, deck_id)
            .with_context(|| format!("deck id {} is not found", deck_id))?;

        let field_names = self.model_field_names(&model).await?;
        let fields = named_fields(&field_names, fields)?;

        let params = json!({
            "note": {
                "deckName": deck,
                "modelName": model,
                "fields": fields,
                "tags": tags,
                "options": { "allowDuplicate": false }
            }
        });

        let response: AnkiResponse<u64> = self.invoke("addNote", params).await?;
        Ok(response.into_option()?.is_some())
    }
}

/// Search matching notes of `model` whose `field` is exactly `value`
fn duplicate_query(model: &str, field: &str, value: &str) -> String {
    format!(
        "\"note:{}\" \"{}:{}\"",
        escape_search(model),
        escape_search(field),
        escape_search(value)
    )
}

fn escape_search(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '*' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn name_for_id(names: &HashMap<String, u64>, id: u64) -> Option<String> {
    names
        .iter()
        .find(|(_, value)| **value == id)
        .map(|(name, _)| name.clone())
}

/// Pair ordered values with the model's field names
fn named_fields(
    names: &[String],
    values: &[String],
) -> Result<serde_json::Map<String, serde_json::Value>> {
    if names.len() != values.len() {
        anyhow::bail!(
            "model has {} fields but the note has {} values",
            names.len(),
            values.len()
        );
    }

    Ok(names
        .iter()
        .zip(values)
        .map(|(name, value)| (name.clone(), serde_json::Value::String(value.clone())))
        .collect())
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        self.result
            .context("AnkiConnect returned null result")
    }

    /// Like `into_result`, but a null result without an error is not a failure
    fn into_option(self) -> Result<Option<T>> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        Ok(self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_query_escapes_specials() {
        assert_eq!(
            duplicate_query("japanese(dict)", "Expression", "走る"),
            r#""note:japanese(dict)" "Expression:走る""#
        );
        assert_eq!(
            duplicate_query("m", "f", r#"a"b*c_d\e"#),
            r#""note:m" "f:a\"b\*c\_d\\e""#
        );
    }

    #[test]
    fn test_named_fields_requires_matching_count() {
        let names = vec!["Front".to_string(), "Back".to_string()];
        let fields = named_fields(&names, &["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(fields["Front"], "a");
        assert_eq!(fields["Back"], "b");

        assert!(named_fields(&names, &["a".to_string()]).is_err());
    }

    #[test]
    fn test_name_for_id() {
        let names = HashMap::from([("Default".to_string(), 1), ("Japanese_Word".to_string(), 7)]);
        assert_eq!(name_for_id(&names, 7).as_deref(), Some("Japanese_Word"));
        assert_eq!(name_for_id(&names, 3), None);
    }

    #[test]
    fn test_response_error_wins() {
        let response: AnkiResponse<u64> =
            serde_json::from_str(r#"{"result": null, "error": "deck was not found"}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert!(err.to_string().contains("deck was not found"));
    }

    #[test]
    fn test_null_result_as_option() {
        let response: AnkiResponse<u64> =
            serde_json::from_str(r#"{"result": 1496198395707, "error": null}"#).unwrap();
        assert_eq!(response.into_option().unwrap(), Some(1496198395707));

        let response: AnkiResponse<u64> =
            serde_json::from_str(r#"{"result": null, "error": null}"#).unwrap();
        assert_eq!(response.into_option().unwrap(), None);
    }
}
