//! Suggest `Reflect` methods over the legacy reflection idioms they replace

use super::{Rule, RuleContext, RuleMeta};
use crate::config::{PreferReflectConfig, ReflectMethod};
use crate::core::Result;
use std::collections::HashSet;
use tree_sitter::Node;

pub const RULE_ID: &str = "prefer-reflect";

const REFLECT_NAMESPACE: &str = "Reflect";

/// The legacy namespace-method names the call matcher recognizes. Any other
/// property name classifies as a non-match; there is no dynamic lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LegacyCall {
    Apply,
    Call,
    DefineProperty,
    GetOwnPropertyDescriptor,
    GetPrototypeOf,
    IsExtensible,
    GetOwnPropertyNames,
    PreventExtensions,
    SetPrototypeOf,
}

impl LegacyCall {
    fn from_method_name(name: &str) -> Option<Self> {
        match name {
            "apply" => Some(Self::Apply),
            "call" => Some(Self::Call),
            "defineProperty" => Some(Self::DefineProperty),
            "getOwnPropertyDescriptor" => Some(Self::GetOwnPropertyDescriptor),
            "getPrototypeOf" => Some(Self::GetPrototypeOf),
            "isExtensible" => Some(Self::IsExtensible),
            "getOwnPropertyNames" => Some(Self::GetOwnPropertyNames),
            "preventExtensions" => Some(Self::PreventExtensions),
            "setPrototypeOf" => Some(Self::SetPrototypeOf),
            _ => None,
        }
    }

    /// Human-readable name of the legacy form, used only in message text
    fn existing_name(self) -> &'static str {
        match self {
            Self::Apply => "Function.prototype.apply",
            Self::Call => "Function.prototype.call",
            Self::DefineProperty => "Object.defineProperty",
            Self::GetOwnPropertyDescriptor => "Object.getOwnPropertyDescriptor",
            Self::GetPrototypeOf => "Object.getPrototypeOf",
            Self::IsExtensible => "Object.isExtensible",
            Self::GetOwnPropertyNames => "Object.getOwnPropertyNames",
            Self::PreventExtensions => "Object.preventExtensions",
            Self::SetPrototypeOf => "Object.setPrototypeOf",
        }
    }

    /// Preferred replacement. `call` and `apply` share one substitute.
    fn substitute(self) -> ReflectMethod {
        match self {
            Self::Apply | Self::Call => ReflectMethod::Apply,
            Self::DefineProperty => ReflectMethod::DefineProperty,
            Self::GetOwnPropertyDescriptor => ReflectMethod::GetOwnPropertyDescriptor,
            Self::GetPrototypeOf => ReflectMethod::GetPrototypeOf,
            Self::IsExtensible => ReflectMethod::IsExtensible,
            Self::GetOwnPropertyNames => ReflectMethod::OwnKeys,
            Self::PreventExtensions => ReflectMethod::PreventExtensions,
            Self::SetPrototypeOf => ReflectMethod::SetPrototypeOf,
        }
    }
}

/// The prefer-reflect rule. Holds only the immutable exception set built at
/// construction; every check is a stateless single-node classification, so
/// re-running over an unchanged tree yields identical diagnostics.
#[derive(Debug)]
pub struct PreferReflect {
    exceptions: HashSet<ReflectMethod>,
}

impl PreferReflect {
    pub fn new(config: &PreferReflectConfig) -> Self {
        Self {
            exceptions: config.exception_set(),
        }
    }

    /// Construct from the host's positional options array. Invalid
    /// configuration is rejected here, before the rule activates.
    pub fn from_options(options: &[serde_json::Value]) -> Result<Self> {
        Ok(Self::new(&PreferReflectConfig::from_options(options)?))
    }

    fn report(&self, node: Node, existing: &str, substitute: &str, ctx: &mut RuleContext) {
        ctx.report(
            RULE_ID,
            node,
            format!("Avoid using {existing}, instead use {substitute}."),
        );
    }

    /// `Namespace.method(...)` invocations of legacy reflection methods
    fn check_call_expression(&self, node: Node, ctx: &mut RuleContext) {
        let Some(callee) = node.child_by_field_name("function") else {
            return;
        };
        if callee.kind() != "member_expression" {
            return;
        }
        let Some(property) = callee.child_by_field_name("property") else {
            return;
        };
        let Some(legacy) = LegacyCall::from_method_name(ctx.node_text(property)) else {
            return;
        };

        // Purely syntactic guard: a call already made through the `Reflect`
        // identifier is compliant. No alias or shadowing resolution.
        let on_reflect = callee.child_by_field_name("object").is_some_and(|object| {
            object.kind() == "identifier" && ctx.node_text(object) == REFLECT_NAMESPACE
        });
        if on_reflect {
            return;
        }

        let substitute = legacy.substitute();
        if self.exceptions.contains(&substitute) {
            return;
        }
        self.report(
            node,
            legacy.existing_name(),
            substitute.qualified_name(),
            ctx,
        );
    }

    /// `delete obj.prop` and `delete obj[key]`. A bare `delete name` is
    /// syntactically inert for property removal and is never reported.
    fn check_unary_expression(&self, node: Node, ctx: &mut RuleContext) {
        let is_delete = node
            .child_by_field_name("operator")
            .is_some_and(|op| ctx.node_text(op) == "delete");
        if !is_delete {
            return;
        }
        let targets_identifier = node
            .child_by_field_name("argument")
            .is_none_or(|argument| argument.kind() == "identifier");
        if targets_identifier || self.exceptions.contains(&ReflectMethod::DeleteProperty) {
            return;
        }
        self.report(node, "the delete keyword", "Reflect.deleteProperty", ctx);
    }

    /// `key in obj` membership tests, regardless of operand shapes
    fn check_binary_expression(&self, node: Node, ctx: &mut RuleContext) {
        let is_in = node
            .child_by_field_name("operator")
            .is_some_and(|op| ctx.node_text(op) == "in");
        if !is_in || self.exceptions.contains(&ReflectMethod::Has) {
            return;
        }
        self.report(node, "the in keyword", "Reflect.has", ctx);
    }
}

impl Rule for PreferReflect {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: RULE_ID,
            description: "Suggest Reflect methods over legacy reflection idioms",
        }
    }

    fn node_kinds(&self) -> &'static [&'static str] {
        &["call_expression", "unary_expression", "binary_expression"]
    }

    fn check(&self, node: Node, ctx: &mut RuleContext) {
        match node.kind() {
            "call_expression" => self.check_call_expression(node, ctx),
            "unary_expression" => self.check_unary_expression(node, ctx),
            "binary_expression" => self.check_binary_expression(node, ctx),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LEGACY: [LegacyCall; 9] = [
        LegacyCall::Apply,
        LegacyCall::Call,
        LegacyCall::DefineProperty,
        LegacyCall::GetOwnPropertyDescriptor,
        LegacyCall::GetPrototypeOf,
        LegacyCall::IsExtensible,
        LegacyCall::GetOwnPropertyNames,
        LegacyCall::PreventExtensions,
        LegacyCall::SetPrototypeOf,
    ];

    #[test]
    fn every_legacy_form_has_display_and_substitute() {
        for legacy in ALL_LEGACY {
            assert!(!legacy.existing_name().is_empty());
            assert!(legacy
                .substitute()
                .qualified_name()
                .starts_with("Reflect."));
        }
    }

    #[test]
    fn call_and_apply_share_one_substitute() {
        assert_eq!(LegacyCall::Call.substitute(), ReflectMethod::Apply);
        assert_eq!(LegacyCall::Apply.substitute(), ReflectMethod::Apply);
    }

    #[test]
    fn get_own_property_names_maps_to_own_keys() {
        assert_eq!(
            LegacyCall::GetOwnPropertyNames.substitute(),
            ReflectMethod::OwnKeys
        );
    }

    #[test]
    fn classification_round_trips_through_the_source_name() {
        let names = [
            "apply",
            "call",
            "defineProperty",
            "getOwnPropertyDescriptor",
            "getPrototypeOf",
            "isExtensible",
            "getOwnPropertyNames",
            "preventExtensions",
            "setPrototypeOf",
        ];
        for (name, legacy) in names.iter().zip(ALL_LEGACY) {
            assert_eq!(LegacyCall::from_method_name(name), Some(legacy));
        }
        assert_eq!(LegacyCall::from_method_name("keys"), None);
        assert_eq!(LegacyCall::from_method_name(""), None);
    }
}
