use crate::{IntentSnapshot, PluginError, PluginResult, ResultRecord};

pub const METHOD_READ_TAG_ID: &str = "readTagId";
pub const METHOD_GET_LAST_INTENT: &str = "getLastIntent";
pub const METHOD_TEST_PLUGIN: &str = "testPlugin";

/// Plugin name used when none is configured.
pub const DEFAULT_PLUGIN_NAME: &str = "NFCTagReader";

/// Read the UID of a tag delivered by a discovery intent.
///
/// # Errors
/// - [`PluginError::NoTagFound`] when the action is missing or not a discovery action
/// - [`PluginError::NoIntent`] when a discovery action carries no tag identifier
pub fn read_tag_id(snapshot: &IntentSnapshot) -> PluginResult<ResultRecord> {
    match &snapshot.action {
        Some(action) if action.is_discovery() => {}
        _ => return Err(PluginError::NoTagFound),
    }
    snapshot
        .tag_identifier
        .as_ref()
        .map(ResultRecord::tag_read)
        .ok_or(PluginError::NoIntent)
}

/// Report whatever the current intent carries. Never fails.
#[inline]
pub fn get_last_intent(snapshot: &IntentSnapshot) -> ResultRecord {
    ResultRecord::intent_report(snapshot)
}

/// Liveness probe for `plugin_name`.
pub fn test_plugin(plugin_name: &str) -> ResultRecord {
    ResultRecord::message(liveness_message(plugin_name))
}

#[inline]
pub fn liveness_message(plugin_name: &str) -> String {
    format!("Plugin {plugin_name} is working correctly!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IntentAction, TagIdentifier};

    #[test]
    fn read_tag_id_resolves_discovered_tag() {
        let snapshot = IntentSnapshot::discovered(IntentAction::TagDiscovered, vec![0x04u8, 0xA3]);
        let record = read_tag_id(&snapshot).unwrap();
        assert_eq!(record.success, Some(true));
        assert_eq!(record.tag_id(), Some("04A3"));
        assert_eq!(record.tag_id_formatted(), Some("04:A3"));
    }

    #[test]
    fn read_tag_id_accepts_every_discovery_action() {
        for action in [
            IntentAction::TagDiscovered,
            IntentAction::NdefDiscovered,
            IntentAction::TechDiscovered,
        ] {
            let snapshot = IntentSnapshot::discovered(action, vec![0xFFu8]);
            assert_eq!(read_tag_id(&snapshot).unwrap().tag_id(), Some("FF"));
        }
    }

    #[test]
    fn read_tag_id_rejects_unknown_action() {
        let snapshot = IntentSnapshot::with_action("SOME_OTHER_ACTION");
        assert_eq!(read_tag_id(&snapshot), Err(PluginError::NoTagFound));
    }

    #[test]
    fn read_tag_id_rejects_absent_intent() {
        assert_eq!(
            read_tag_id(&IntentSnapshot::absent()),
            Err(PluginError::NoTagFound)
        );
    }

    #[test]
    fn read_tag_id_rejects_discovery_without_identifier() {
        let mut snapshot = IntentSnapshot::with_action(IntentAction::TagDiscovered);
        assert_eq!(read_tag_id(&snapshot), Err(PluginError::NoIntent));

        snapshot.has_tag_extra = true;
        assert_eq!(read_tag_id(&snapshot), Err(PluginError::NoIntent));
    }

    #[test]
    fn read_tag_id_accepts_empty_identifier() {
        let snapshot = IntentSnapshot::discovered(
            IntentAction::NdefDiscovered,
            TagIdentifier::new(Vec::<u8>::new()),
        );
        let record = read_tag_id(&snapshot).unwrap();
        assert_eq!(record.tag_id(), Some(""));
        assert_eq!(record.tag_id_formatted(), Some(""));
    }

    #[test]
    fn get_last_intent_never_fails() {
        assert!(get_last_intent(&IntentSnapshot::absent()).is_empty());

        let snapshot = IntentSnapshot::discovered(IntentAction::TechDiscovered, vec![0x01u8, 0x02]);
        let record = get_last_intent(&snapshot);
        assert_eq!(record.action, Some(IntentAction::TechDiscovered));
        assert_eq!(record.has_tag, Some(true));
        assert_eq!(record.tag_id_formatted(), Some("01:02"));
    }

    #[test]
    fn test_plugin_is_constant() {
        let first = test_plugin(DEFAULT_PLUGIN_NAME);
        assert_eq!(first, test_plugin(DEFAULT_PLUGIN_NAME));
        assert_eq!(
            first.message.as_deref(),
            Some("Plugin NFCTagReader is working correctly!")
        );
    }
}
