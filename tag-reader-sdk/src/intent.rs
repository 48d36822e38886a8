use crate::codec::TagIdCodec;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

pub const ACTION_TAG_DISCOVERED: &str = "android.nfc.action.TAG_DISCOVERED";
pub const ACTION_NDEF_DISCOVERED: &str = "android.nfc.action.NDEF_DISCOVERED";
pub const ACTION_TECH_DISCOVERED: &str = "android.nfc.action.TECH_DISCOVERED";
/// Extra key under which the host attaches the discovered tag.
pub const EXTRA_TAG: &str = "android.nfc.extra.TAG";

const ACTION_PREFIX: &str = "android.nfc.action.";

/// Classification of the intent action string.
///
/// Anything outside the three discovery actions is carried verbatim in
/// `Other` so it can be reported back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IntentAction {
    TagDiscovered,
    NdefDiscovered,
    TechDiscovered,
    Other(String),
}

impl IntentAction {
    /// Parse a host action string. Accepts the fully qualified constant or
    /// its bare suffix (`TAG_DISCOVERED`).
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(ACTION_PREFIX).unwrap_or(raw) {
            "TAG_DISCOVERED" => IntentAction::TagDiscovered,
            "NDEF_DISCOVERED" => IntentAction::NdefDiscovered,
            "TECH_DISCOVERED" => IntentAction::TechDiscovered,
            _ => IntentAction::Other(raw.to_string()),
        }
    }

    #[inline]
    pub fn is_discovery(&self) -> bool {
        !matches!(self, IntentAction::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            IntentAction::TagDiscovered => ACTION_TAG_DISCOVERED,
            IntentAction::NdefDiscovered => ACTION_NDEF_DISCOVERED,
            IntentAction::TechDiscovered => ACTION_TECH_DISCOVERED,
            IntentAction::Other(raw) => raw,
        }
    }
}

impl From<String> for IntentAction {
    fn from(raw: String) -> Self {
        IntentAction::parse(&raw)
    }
}

impl From<&str> for IntentAction {
    fn from(raw: &str) -> Self {
        IntentAction::parse(raw)
    }
}

impl From<IntentAction> for String {
    fn from(action: IntentAction) -> Self {
        match action {
            IntentAction::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for IntentAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw UID bytes of a physical tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagIdentifier(Vec<u8>);

impl TagIdentifier {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        TagIdCodec::encode_hex(&self.0)
    }
}

impl From<Vec<u8>> for TagIdentifier {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for TagIdentifier {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// Read-only view of the host's current intent, taken once per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentSnapshot {
    /// False when the host had no intent at all.
    pub present: bool,
    pub action: Option<IntentAction>,
    pub has_tag_extra: bool,
    pub tag_identifier: Option<TagIdentifier>,
}

impl IntentSnapshot {
    /// Snapshot standing in for a missing intent; every field unset.
    #[inline]
    pub fn absent() -> Self {
        Self::default()
    }

    /// Snapshot of a tag discovery carrying `id`.
    pub fn discovered(action: IntentAction, id: impl Into<TagIdentifier>) -> Self {
        Self {
            present: true,
            action: Some(action),
            has_tag_extra: true,
            tag_identifier: Some(id.into()),
        }
    }

    /// Snapshot of an intent with `action` and no tag extra.
    pub fn with_action(action: impl Into<IntentAction>) -> Self {
        Self {
            present: true,
            action: Some(action.into()),
            has_tag_extra: false,
            tag_identifier: None,
        }
    }
}

/// Accessors the host's intent object has to offer.
pub trait HostIntent {
    fn action(&self) -> Option<&str>;
    fn has_extra(&self, key: &str) -> bool;
    /// UID of the attached tag, if the tag extra resolved to a tag.
    fn tag_id(&self) -> Option<&[u8]>;
}

/// Serializable intent as delivered across the host boundary.
///
/// A `tagId` implies the tag extra. Listing [`EXTRA_TAG`] in `extras`
/// without a `tagId` models an extra that did not resolve to a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIntent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<Vec<u8>>,
}

impl RawIntent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, id: impl Into<Vec<u8>>) -> Self {
        self.tag_id = Some(id.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>) -> Self {
        self.extras.push(key.into());
        self
    }
}

impl HostIntent for RawIntent {
    fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    fn has_extra(&self, key: &str) -> bool {
        self.extras.iter().any(|k| k == key) || (key == EXTRA_TAG && self.tag_id.is_some())
    }

    fn tag_id(&self) -> Option<&[u8]> {
        self.tag_id.as_deref()
    }
}

/// Read the three fields this plugin cares about from a host intent.
///
/// A missing intent yields [`IntentSnapshot::absent`]. The tag UID is only
/// read when the tag extra is present.
pub fn extract_snapshot(intent: Option<&dyn HostIntent>) -> IntentSnapshot {
    let Some(intent) = intent else {
        return IntentSnapshot::absent();
    };
    let has_tag_extra = intent.has_extra(EXTRA_TAG);
    let tag_identifier = if has_tag_extra {
        intent.tag_id().map(TagIdentifier::from)
    } else {
        None
    };
    IntentSnapshot {
        present: true,
        action: intent.action().map(IntentAction::parse),
        has_tag_extra,
        tag_identifier,
    }
}

/// Host capability handing out the current intent.
///
/// Implementations are read on every call and must not cache across calls.
pub trait IntentSource: Send + Sync {
    fn read_snapshot(&self) -> IntentSnapshot;
}

/// Source returning the same intent on every read.
#[derive(Debug, Clone, Default)]
pub struct StaticIntentSource {
    intent: Option<RawIntent>,
}

impl StaticIntentSource {
    pub fn new(intent: Option<RawIntent>) -> Self {
        Self { intent }
    }

    pub fn empty() -> Self {
        Self { intent: None }
    }
}

impl IntentSource for StaticIntentSource {
    fn read_snapshot(&self) -> IntentSnapshot {
        extract_snapshot(self.intent.as_ref().map(|i| i as &dyn HostIntent))
    }
}
