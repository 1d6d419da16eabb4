use graphql_parser::schema::Value;

use crate::ast::static_graphql::Directive;

pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

pub trait SchemaDirective {
    fn directive_name() -> &'static str;
    fn is(directive: &Directive) -> bool {
        Self::directive_name() == directive.name
    }
    fn parse(directive: &Directive) -> Self
    where
        Self: Sized;
}

pub fn find_directive<D: SchemaDirective>(directives: &[Directive]) -> Option<D> {
    directives
        .iter()
        .find(|directive| D::is(directive))
        .map(D::parse)
}

fn string_argument(directive: &Directive, name: &str) -> Option<String> {
    directive
        .arguments
        .iter()
        .find_map(|(arg_name, arg_value)| match arg_value {
            Value::String(value) if arg_name == name => Some(value.clone()),
            _ => None,
        })
}

pub fn directive_with_string_argument(name: &str, argument: &str, value: &str) -> Directive {
    Directive {
        position: Default::default(),
        name: name.to_string(),
        arguments: vec![(argument.to_string(), Value::String(value.to_string()))],
    }
}

/// `directive @canonical on OBJECT | INTERFACE | INPUT_OBJECT | UNION | ENUM | SCALAR | FIELD_DEFINITION | INPUT_FIELD_DEFINITION`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CanonicalDirective;

impl CanonicalDirective {
    pub const NAME: &str = "canonical";
}

impl SchemaDirective for CanonicalDirective {
    fn directive_name() -> &'static str {
        Self::NAME
    }

    fn parse(_: &Directive) -> Self {
        Self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecatedDirective {
    pub reason: String,
}

impl DeprecatedDirective {
    pub const NAME: &str = "deprecated";

    pub fn to_directive(reason: &str) -> Directive {
        directive_with_string_argument(Self::NAME, "reason", reason)
    }
}

impl SchemaDirective for DeprecatedDirective {
    fn directive_name() -> &'static str {
        Self::NAME
    }

    fn parse(directive: &Directive) -> Self {
        Self {
            reason: string_argument(directive, "reason")
                .unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecifiedByDirective {
    pub url: Option<String>,
}

impl SpecifiedByDirective {
    pub const NAME: &str = "specifiedBy";

    pub fn to_directive(url: &str) -> Directive {
        directive_with_string_argument(Self::NAME, "url", url)
    }
}

impl SchemaDirective for SpecifiedByDirective {
    fn directive_name() -> &'static str {
        Self::NAME
    }

    fn parse(directive: &Directive) -> Self {
        Self {
            url: string_argument(directive, "url"),
        }
    }
}
