// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the window can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Workbench,
    CameraPreview,
}
