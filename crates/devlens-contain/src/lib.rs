#![forbid(unsafe_code)]

//! Generic containerization wrapper.
//!
//! [`Contained`] decorates any [`Widget`] with an identification/selection
//! boundary. One decision procedure applies uniformly to every primitive
//! type; there are no per-primitive copies of the wrap-or-bare logic.
//!
//! At render time the wrapper reads the dev-mode config carried by the
//! frame and either renders the inner widget bare or registers a boundary
//! tagged with the usage id, definition, and selectable flag, then renders
//! the inner widget inside it. Boundaries register before children render,
//! so nested boundaries resolve innermost-first during hit testing.
//!
//! A call site that should wrap but supplied no identifier is a build
//! integration mistake: in debug builds the render panics to force a fix;
//! in release builds the condition is logged and the widget renders bare so
//! a tooling-only concern never crashes end users. Whether that asymmetry
//! is product-intended is unconfirmed; it matches the observed behavior of
//! the system this replaces.
//!
//! # Usage
//!
//! ```
//! use devlens_contain::{Contained, DevProps};
//! use devlens_core::config::DevModeConfig;
//! use devlens_core::geometry::Rect;
//! use devlens_render::{Frame, Widget};
//!
//! struct Label(&'static str);
//! impl Widget for Label {
//!     fn render(&self, area: Rect, frame: &mut Frame) {
//!         devlens_render::drawing::draw_text(
//!             frame.buffer_mut(), area.x, area.y, self.0,
//!             Default::default(), area.right(),
//!         );
//!     }
//! }
//!
//! let widget = Contained::new(Label("clients"), "label", DevProps::assigned("client-title"));
//! let mut frame = Frame::with_config(20, 5, DevModeConfig::new(true, true));
//! widget.render(Rect::new(0, 0, 10, 1), &mut frame);
//! assert_eq!(frame.boundaries().len(), 1);
//! ```

use std::fmt;

use devlens_core::config::DevModeConfig;
use devlens_core::geometry::Rect;
use devlens_core::ident::{Identity, UsageId};
use devlens_render::frame::{BoundaryEntry, Frame};
use devlens_render::Widget;

/// Containerization arguments accepted by every wrappable primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevProps {
    /// Identity supplied by the call site. `None` means the call site said
    /// nothing, which is an error whenever wrapping is required.
    pub id: Option<Identity>,
    /// Inspector display name override.
    pub name: Option<String>,
    /// Inspector description override.
    pub description: Option<String>,
    /// Whether clicking the boundary selects it.
    pub selectable: bool,
    /// Per-call-site override of the global granularity, in either direction.
    pub detailed: Option<bool>,
}

impl Default for DevProps {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            description: None,
            selectable: true,
            detailed: None,
        }
    }
}

impl DevProps {
    /// Props with an assigned usage id.
    pub fn assigned(id: impl Into<UsageId>) -> Self {
        Self {
            id: Some(Identity::Assigned(id.into())),
            ..Self::default()
        }
    }

    /// Props that explicitly opt out of containerization.
    pub fn anonymous() -> Self {
        Self {
            id: Some(Identity::Anonymous),
            ..Self::default()
        }
    }

    /// Set the inspector display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the inspector description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set whether the boundary is selectable.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Override the global granularity for this call site.
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = Some(detailed);
        self
    }
}

/// Outcome of the containerization decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPlan {
    /// Render the primitive unadorned; no boundary, no registry interaction.
    Bare,
    /// Render inside an identification boundary.
    Boundary { id: UsageId, selectable: bool },
}

/// Errors from the containerization decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainError {
    /// Wrapping was required but the call site supplied no identifier.
    MissingIdentifier {
        /// Definition of the primitive at the failing call site.
        definition: &'static str,
    },
}

impl fmt::Display for ContainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingIdentifier { definition } => write!(
                f,
                "`{definition}` requires a dev identifier while detailed containerization is active"
            ),
        }
    }
}

impl std::error::Error for ContainError {}

/// The wrap-or-bare decision, applied identically to every primitive.
///
/// A per-call-site `detailed` override beats the global default in either
/// direction; the master `enabled` switch beats everything and never errors.
pub fn decide(
    definition: &'static str,
    props: &DevProps,
    config: DevModeConfig,
) -> Result<RenderPlan, ContainError> {
    if !config.enabled {
        return Ok(RenderPlan::Bare);
    }

    let should_wrap = match props.detailed {
        Some(explicit) => explicit,
        None => config.detailed_containerization,
    };

    match (&props.id, should_wrap) {
        (None, true) => Err(ContainError::MissingIdentifier { definition }),
        (None, false) => Ok(RenderPlan::Bare),
        (Some(Identity::Anonymous), _) => Ok(RenderPlan::Bare),
        (Some(Identity::Assigned(_)), false) => Ok(RenderPlan::Bare),
        (Some(Identity::Assigned(id)), true) => Ok(RenderPlan::Boundary {
            id: id.clone(),
            selectable: props.selectable,
        }),
    }
}

/// A widget wrapped in an identification/selection boundary.
pub struct Contained<W> {
    inner: W,
    definition: &'static str,
    props: DevProps,
}

impl<W> Contained<W> {
    /// Wrap a widget. `definition` names the primitive/template this call
    /// site instantiates (e.g. `"button"`, `"table"`).
    pub fn new(inner: W, definition: &'static str, props: DevProps) -> Self {
        Self {
            inner,
            definition,
            props,
        }
    }

    /// The wrapped widget.
    #[inline]
    pub fn inner(&self) -> &W {
        &self.inner
    }

    /// The containerization props.
    #[inline]
    pub fn props(&self) -> &DevProps {
        &self.props
    }

    /// The definition tag.
    #[inline]
    pub fn definition(&self) -> &'static str {
        self.definition
    }
}

impl<W: fmt::Debug> fmt::Debug for Contained<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contained")
            .field("definition", &self.definition)
            .field("props", &self.props)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<W: Widget> Widget for Contained<W> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        match decide(self.definition, &self.props, frame.config()) {
            Ok(RenderPlan::Bare) => self.inner.render(area, frame),
            Ok(RenderPlan::Boundary { id, selectable }) => {
                // Register before rendering children so nested boundaries
                // end up later in registration order (innermost wins).
                frame.register_boundary(BoundaryEntry {
                    id,
                    definition: self.definition,
                    name: self.props.name.clone(),
                    description: self.props.description.clone(),
                    selectable,
                    rect: area,
                });
                self.inner.render(area, frame);
            }
            Err(err) => {
                if cfg!(debug_assertions) {
                    panic!("{err}");
                }
                tracing::warn!(definition = self.definition, %err, "rendering bare");
                self.inner.render(area, frame);
            }
        }
    }
}
