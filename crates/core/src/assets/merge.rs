//! Merging generated entries into existing documents
//!
//! Entries are matched by their identifying field (`label` for tasks, `name` for launch
//! configurations). Matches are replaced in place, new entries are appended, and anything
//! the user added by hand is left untouched.

use serde::Serialize;
use serde_json::Value;

use crate::assets::launch::LaunchDocument;
use crate::assets::tasks::TasksDocument;
use crate::types::{AssetError, AssetResult};

pub fn merge_tasks(existing: Option<Value>, generated: &TasksDocument) -> AssetResult<Value> {
    merge_document(existing, generated, "tasks", "label")
}

pub fn merge_launch(existing: Option<Value>, generated: &LaunchDocument) -> AssetResult<Value> {
    merge_document(existing, generated, "configurations", "name")
}

fn merge_document<T: Serialize>(
    existing: Option<Value>,
    generated: &T,
    list_field: &str,
    id_field: &str,
) -> AssetResult<Value> {
    let generated = serde_json::to_value(generated)?;
    let Some(existing) = existing else {
        return Ok(generated);
    };

    let Value::Object(mut document) = existing else {
        return Err(AssetError::Config(format!(
            "Existing document is not a JSON object; cannot merge '{list_field}'"
        )));
    };
    let Value::Object(generated) = generated else {
        return Err(AssetError::Config(format!(
            "Generated '{list_field}' document is not a JSON object"
        )));
    };

    let mut entries = match document.remove(list_field) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(AssetError::Config(format!(
                "Existing document field '{list_field}' is not an array"
            )))
        }
    };

    let generated_entries = match generated.get(list_field) {
        Some(Value::Array(entries)) => entries.clone(),
        _ => Vec::new(),
    };

    for entry in generated_entries {
        let id = entry.get(id_field).cloned();
        let position = id.as_ref().and_then(|id| {
            entries
                .iter()
                .position(|existing| existing.get(id_field) == Some(id))
        });
        match position {
            Some(index) => entries[index] = entry,
            None => entries.push(entry),
        }
    }

    if !document.contains_key("version") {
        if let Some(version) = generated.get("version") {
            document.insert("version".to_string(), version.clone());
        }
    }
    document.insert(list_field.to_string(), Value::Array(entries));

    Ok(Value::Object(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::launch::{attach_configuration, blazor_standalone_configuration};
    use crate::assets::tasks::build_task;
    use crate::paths::ResolvedPath;
    use serde_json::json;

    fn generated_tasks() -> TasksDocument {
        let project = ResolvedPath::workspace_folder().join("app.csproj");
        TasksDocument::new(vec![build_task("dotnet", &project)])
    }

    #[test]
    fn test_no_existing_document() {
        let merged = merge_tasks(None, &generated_tasks()).unwrap();
        assert_eq!(merged["version"], "2.0.0");
        assert_eq!(merged["tasks"][0]["label"], "build");
    }

    #[test]
    fn test_replaces_matching_and_keeps_foreign_entries() {
        let existing = json!({
            "version": "2.0.0",
            "tasks": [
                { "label": "lint", "command": "dotnet", "args": ["format"] },
                { "label": "build", "command": "dotnet", "args": ["build", "old.csproj"] }
            ]
        });

        let merged = merge_tasks(Some(existing), &generated_tasks()).unwrap();
        let tasks = merged["tasks"].as_array().unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0]["label"], "lint");
        assert_eq!(tasks[1]["label"], "build");
        assert_eq!(tasks[1]["args"][1], "${workspaceFolder}/app.csproj");
    }

    #[test]
    fn test_appends_new_launch_configurations() {
        let existing = json!({
            "configurations": [{ "name": "Custom", "type": "node", "request": "launch" }],
            "compounds": []
        });
        let generated = LaunchDocument::new(vec![
            blazor_standalone_configuration(&ResolvedPath::workspace_folder()),
            attach_configuration(),
        ]);

        let merged = merge_launch(Some(existing), &generated).unwrap();

        assert_eq!(merged["version"], "0.2.0");
        assert_eq!(merged["configurations"].as_array().unwrap().len(), 3);
        assert_eq!(merged["configurations"][0]["name"], "Custom");
        assert!(merged.get("compounds").is_some());
    }

    #[test]
    fn test_rejects_malformed_documents() {
        let not_object = merge_tasks(Some(json!([1, 2])), &generated_tasks());
        assert!(matches!(not_object, Err(AssetError::Config(_))));

        let bad_list = merge_tasks(Some(json!({ "tasks": "build" })), &generated_tasks());
        assert!(matches!(bad_list, Err(AssetError::Config(_))));
    }
}
