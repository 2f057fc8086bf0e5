//! Crate-wide display constants: the sentinel create-group entry, the
//! default subscription-group YAML template offered in the editor, and the
//! fixed toast display options.

/// Label of the sentinel dropdown entry that opens the group editor on a
/// blank template.
pub const CREATE_GROUP_TEXT: &str = "Create a new subscription group";

/// Sentinel id for the create-group entry. Never persisted.
pub const CREATE_GROUP_ID: &str = "n/a";

/// Default YAML offered when authoring a new subscription group.
pub const DEFAULT_SUBSCRIPTION_YAML: &str = "\
# Below is a sample subscription group template. You may refer the documentation for more examples.

subscriptionGroupName: give your subscription group a name
application: provide an application name registered with the console
subscribedDetections:
  - list the detection names that this group subscribes to
alertSchemes:
  - type: EMAIL
recipients:
  to:
  cc:
  bcc:
cron: \"0 0/5 * 1/1 * ? *\"
";

/// Display options applied to every toast.
///
/// Fire-and-forget: the notifier decides how (or whether) to honor them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastOptions {
    /// How long the toast stays on screen, in milliseconds.
    pub time_out_ms: u64,
    /// Screen corner the toast is anchored to.
    pub position: ToastPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    TopRight,
    BottomRight,
}

/// The one set of options every loader toast uses.
pub const TOAST_OPTIONS: ToastOptions = ToastOptions {
    time_out_ms: 10_000,
    position: ToastPosition::TopRight,
};
