use crate::{codec::TagIdCodec, intent::IntentAction, IntentSnapshot, TagIdentifier};
use serde::Serialize;

/// Hex and grouped forms of one UID.
///
/// Only constructible from raw bytes, so the grouped form is always the
/// grouping of the plain form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTagId {
    tag_id: String,
    tag_id_formatted: String,
}

impl FormattedTagId {
    pub fn from_identifier(id: &TagIdentifier) -> Self {
        let (tag_id, tag_id_formatted) = TagIdCodec::encode_pair(id.as_bytes());
        Self {
            tag_id,
            tag_id_formatted,
        }
    }

    #[inline]
    pub fn tag_id(&self) -> &str {
        &self.tag_id
    }

    #[inline]
    pub fn tag_id_formatted(&self) -> &str {
        &self.tag_id_formatted
    }
}

/// Payload resolved back to the host. Absent fields are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<IntentAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_tag: Option<bool>,
    #[serde(flatten)]
    pub tag: Option<FormattedTagId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResultRecord {
    pub fn tag_read(id: &TagIdentifier) -> Self {
        Self {
            success: Some(true),
            tag: Some(FormattedTagId::from_identifier(id)),
            ..Default::default()
        }
    }

    /// Everything derivable from `snapshot`; empty when no intent was present.
    pub fn intent_report(snapshot: &IntentSnapshot) -> Self {
        if !snapshot.present {
            return Self::default();
        }
        Self {
            action: snapshot.action.clone(),
            has_tag: Some(snapshot.has_tag_extra),
            tag: snapshot
                .tag_identifier
                .as_ref()
                .map(FormattedTagId::from_identifier),
            ..Default::default()
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    #[inline]
    pub fn tag_id(&self) -> Option<&str> {
        self.tag.as_ref().map(FormattedTagId::tag_id)
    }

    #[inline]
    pub fn tag_id_formatted(&self) -> Option<&str> {
        self.tag.as_ref().map(FormattedTagId::tag_id_formatted)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::Value::Object(Default::default()))
    }
}
