//! Render pipeline
//!
//! Pure mapping from normalized entries to toolkit-agnostic descriptors.
//! Every text field is escaped on the way through; nothing here knows how
//! the descriptors end up on screen.

pub mod escape;
pub mod markup;

use arcmenu_model::{Entry, EntryIndex, IconRef};

pub use escape::EscapedText;

/// Title block shown above the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDescriptor {
    pub header: EscapedText,
    pub message: Option<EscapedText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IconDescriptor {
    Image {
        src: EscapedText,
    },
    Glyph {
        class: EscapedText,
    },
    #[default]
    None,
}

impl From<&IconRef> for IconDescriptor {
    fn from(icon: &IconRef) -> Self {
        match icon {
            IconRef::ImageIcon(uri) => IconDescriptor::Image {
                src: EscapedText::escape(uri),
            },
            IconRef::GlyphIcon(class) => IconDescriptor::Glyph {
                class: EscapedText::escape(class),
            },
            IconRef::None => IconDescriptor::None,
        }
    }
}

/// One card in the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDescriptor {
    /// Original entry index; doubles as the element id.
    pub index: EntryIndex,
    pub header: EscapedText,
    pub message: Option<EscapedText>,
    pub icon: IconDescriptor,
    pub disabled: bool,
}

impl ItemDescriptor {
    pub fn dom_id(&self) -> String {
        self.index.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOutput {
    pub header: Option<HeaderDescriptor>,
    pub items: Vec<ItemDescriptor>,
}

impl RenderOutput {
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.items.is_empty()
    }

    /// Position of an entry within `items`, if it was rendered as a card.
    pub fn slot_of(&self, index: EntryIndex) -> Option<usize> {
        self.items.iter().position(|item| item.index == index)
    }
}

/// Build descriptors for a list of normalized entries.
///
/// Header-tagged entries produce at most one header; the first one wins and
/// later ones are dropped. All other entries become cards in arrival order.
pub fn render(entries: &[Entry]) -> RenderOutput {
    let mut output = RenderOutput::default();

    for entry in entries {
        let message = entry.message.as_deref().map(EscapedText::escape);

        if entry.is_header_entry {
            if output.header.is_some() {
                log::debug!(
                    "[Menu] ignoring extra header entry {}",
                    entry.index
                );
                continue;
            }
            output.header = Some(HeaderDescriptor {
                header: EscapedText::escape(&entry.header),
                message,
            });
            continue;
        }

        output.items.push(ItemDescriptor {
            index: entry.index,
            header: EscapedText::escape(&entry.header),
            message,
            icon: IconDescriptor::from(&entry.icon),
            disabled: entry.disabled,
        });
    }

    output
}
