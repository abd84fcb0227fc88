//! Re-open the note picker filtered by the selected tag.

use crate::actions::ActionFlags;
use crate::error::Result;
use crate::query::PickerItem;

/// Name of the note source the picker is restarted with.
pub const NOTE_SOURCE: &str = "kasten_note";

/// A request to start a picker source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRequest {
    pub source: String,
    pub tag: String,
}

/// Starts a new picker session.
pub trait PickerLauncher {
    fn start(&mut self, request: &SourceRequest) -> Result<()>;
}

/// Start a tag-filtered note listing for every selected tag.
pub fn select_tag<L: PickerLauncher + ?Sized>(
    items: &[PickerItem],
    launcher: &mut L,
) -> Result<ActionFlags> {
    for item in items {
        let request = SourceRequest {
            source: NOTE_SOURCE.to_string(),
            tag: item.action.name.clone(),
        };
        tracing::debug!(tag = %request.tag, "restarting picker for tag");
        launcher.start(&request)?;
    }
    Ok(ActionFlags::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KastenError;
    use crate::vault::Vault;

    #[derive(Default)]
    struct RecordingLauncher {
        started: Vec<SourceRequest>,
        fail: bool,
    }

    impl PickerLauncher for RecordingLauncher {
        fn start(&mut self, request: &SourceRequest) -> Result<()> {
            if self.fail {
                return Err(KastenError::Other("picker unavailable".to_string()));
            }
            self.started.push(request.clone());
            Ok(())
        }
    }

    #[test]
    fn test_select_tag_starts_note_source() {
        let vault = Vault::unchecked("/v");
        let items = vec![
            PickerItem::for_tag("alpha".to_string(), &vault),
            PickerItem::for_tag("beta".to_string(), &vault),
        ];
        let mut launcher = RecordingLauncher::default();

        let flags = select_tag(&items, &mut launcher).unwrap();

        assert_eq!(flags, ActionFlags::None);
        assert_eq!(
            launcher.started,
            vec![
                SourceRequest {
                    source: "kasten_note".to_string(),
                    tag: "alpha".to_string(),
                },
                SourceRequest {
                    source: "kasten_note".to_string(),
                    tag: "beta".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_launcher_error_propagates() {
        let vault = Vault::unchecked("/v");
        let items = vec![PickerItem::for_tag("alpha".to_string(), &vault)];
        let mut launcher = RecordingLauncher {
            fail: true,
            ..RecordingLauncher::default()
        };

        assert!(select_tag(&items, &mut launcher).is_err());
    }
}
