use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner_id: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ItemCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `None`: sin cambios; `Some(None)`: borrar (se envía `null`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl ItemUpdate {
    /// Diferencia entre el item actual y los valores del formulario
    pub fn diff(item: &Item, title: &str, description: &str) -> Self {
        let title = title.trim();
        let description = description.trim();
        Self {
            title: (title != item.title).then(|| title.to_string()),
            description: (description != item.description.as_deref().unwrap_or(""))
                .then(|| (!description.is_empty()).then(|| description.to_string())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ItemsPage {
    pub data: Vec<Item>,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> Item {
        Item {
            id: "i1".to_string(),
            title: "Martillo".to_string(),
            description: Some("Acero".to_string()),
            owner_id: "u1".to_string(),
        }
    }

    #[test]
    fn diff_only_carries_changed_fields() {
        let update = ItemUpdate::diff(&item(), " Martillo ", "Acero forjado");
        assert_eq!(update.title, None);
        assert_eq!(update.description, Some(Some("Acero forjado".to_string())));

        assert!(ItemUpdate::diff(&item(), "Martillo", "Acero").is_empty());
    }

    #[test]
    fn update_skips_unset_fields_on_the_wire() {
        let update = ItemUpdate {
            title: Some("Sierra".to_string()),
            description: None,
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"title":"Sierra"}"#);
    }

    #[test]
    fn clearing_the_description_sends_null() {
        let update = ItemUpdate::diff(&item(), "Martillo", "   ");
        assert_eq!(update.description, Some(None));
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"description":null}"#);
    }
}
