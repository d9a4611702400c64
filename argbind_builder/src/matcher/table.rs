use std::collections::BTreeMap;

use crate::api::{Capturable, ConversionError};
use crate::model::BindingKind;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A registered slot awaiting a value: the association between an identifier (or position) and a caller owned destination.
pub(crate) struct Binding<'a> {
    identifier: Option<String>,
    display_name: String,
    description: Option<String>,
    kind: BindingKind,
    // Holds a borrow of the destination; the table never allocates or frees the destination itself.
    capture: Box<dyn Capturable + 'a>,
}

impl<'a> std::fmt::Debug for Binding<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("identifier", &self.identifier)
            .field("display_name", &self.display_name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<'a> Binding<'a> {
    pub(crate) fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub(crate) fn display_name(&self) -> &str {
        &self.display_name
    }

    pub(crate) fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn kind(&self) -> BindingKind {
        self.kind
    }

    pub(crate) fn current(&self) -> Option<String> {
        self.capture.current()
    }

    pub(crate) fn toggle(&mut self) {
        self.capture.matched();
    }

    pub(crate) fn capture(&mut self, token: &str) -> Result<(), ConversionError> {
        self.capture.capture(token)
    }
}

/// The full set of registered bindings.
///
/// Named bindings are keyed by identifier and kept in lexicographic order (for usage rendering).
/// Positional bindings are kept in two independent sequences, each in registration order.
/// The structure of the table is fixed after registration; parsing only writes through the bindings.
#[derive(Debug, Default)]
pub(crate) struct BindingTable<'a> {
    named: BTreeMap<String, Binding<'a>>,
    mandatory: Vec<Binding<'a>>,
    optional: Vec<Binding<'a>>,
}

impl<'a> BindingTable<'a> {
    pub(crate) fn register_named(
        &mut self,
        identifier: String,
        display_name: String,
        description: Option<String>,
        capture: Box<dyn Capturable + 'a>,
    ) {
        debug_assert!(capture.takes_value());
        self.insert_named(Binding {
            identifier: Some(identifier),
            display_name,
            description,
            kind: BindingKind::NamedValue,
            capture,
        });
    }

    // A switch has no value to name, so its display name is its identifier.
    pub(crate) fn register_switch(
        &mut self,
        identifier: String,
        description: Option<String>,
        capture: Box<dyn Capturable + 'a>,
    ) {
        debug_assert!(!capture.takes_value());
        self.insert_named(Binding {
            display_name: identifier.clone(),
            identifier: Some(identifier),
            description,
            kind: BindingKind::Switch,
            capture,
        });
    }

    // A repeated identifier replaces the earlier binding, which is never touched again.
    fn insert_named(&mut self, binding: Binding<'a>) {
        let identifier = binding
            .identifier()
            .expect("internal error - named binding must have an identifier")
            .to_string();

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering {kind} '{identifier}'.", kind = binding.kind());
        }

        if let Some(_shadowed) = self.named.insert(identifier, binding) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Identifier '{i}' was already registered; the earlier {kind} is shadowed.",
                    i = _shadowed.identifier().unwrap_or_default(),
                    kind = _shadowed.kind(),
                );
            }
        }
    }

    pub(crate) fn register_positional(
        &mut self,
        display_name: String,
        description: Option<String>,
        capture: Box<dyn Capturable + 'a>,
        mandatory: bool,
    ) {
        debug_assert!(capture.takes_value());
        let (kind, sequence) = if mandatory {
            (BindingKind::MandatoryPositional, &mut self.mandatory)
        } else {
            (BindingKind::OptionalPositional, &mut self.optional)
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Registering {kind} '{display_name}' at position {p}.",
                p = sequence.len()
            );
        }

        sequence.push(Binding {
            identifier: None,
            display_name,
            description,
            kind,
            capture,
        });
    }

    pub(crate) fn named(&self) -> impl Iterator<Item = &Binding<'a>> {
        self.named.values()
    }

    pub(crate) fn named_mut(&mut self, identifier: &str) -> Option<&mut Binding<'a>> {
        self.named.get_mut(identifier)
    }

    pub(crate) fn mandatory(&self) -> &[Binding<'a>] {
        &self.mandatory
    }

    pub(crate) fn mandatory_mut(&mut self, index: usize) -> Option<&mut Binding<'a>> {
        self.mandatory.get_mut(index)
    }

    pub(crate) fn optional(&self) -> &[Binding<'a>] {
        &self.optional
    }

    pub(crate) fn optional_mut(&mut self, index: usize) -> Option<&mut Binding<'a>> {
        self.optional.get_mut(index)
    }
}
