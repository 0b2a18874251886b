//! Showing and hiding the plugin window inside its host application.

use cardgrid_core::{GridResult, StackingPolicy, Version};

/// The part of the host application's window API the plugin relies on.
pub trait HostWindow {
    fn show(&self);
    fn hide(&self);
    fn set_stacking_order(&self, order: i32);
    fn host_version(&self) -> String;
}

pub struct PluginWindow<H: HostWindow> {
    host: H,
    policy: StackingPolicy,
}

impl<H: HostWindow> PluginWindow<H> {
    pub fn new(host: H, policy: StackingPolicy) -> Self {
        Self { host, policy }
    }

    /// Show the window, raising it above host content first when `raise` is set.
    ///
    /// An unparsable host version is returned as an error and the window stays hidden.
    pub fn show(&self, raise: bool) -> GridResult<()> {
        if raise {
            let version: Version = self.host.host_version().parse()?;
            let order = self.policy.stacking_for(&version);
            tracing::debug!(%version, order, "setting plugin stacking order");
            self.host.set_stacking_order(order);
        }
        self.host.show();
        Ok(())
    }

    pub fn hide(&self) {
        self.host.hide();
    }
}
