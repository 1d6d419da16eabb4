pub mod ext;
pub mod merge;

/// Aliases for the owned (`'static`, `String`) flavour of the `graphql_parser` AST,
/// which is the only one this crate works with.
pub mod static_graphql {
    use graphql_parser::schema;

    pub type Document = schema::Document<'static, String>;
    pub type Definition = schema::Definition<'static, String>;
    pub type TypeDefinition = schema::TypeDefinition<'static, String>;
    pub type TypeExtension = schema::TypeExtension<'static, String>;
    pub type ObjectType = schema::ObjectType<'static, String>;
    pub type ObjectTypeExtension = schema::ObjectTypeExtension<'static, String>;
    pub type InterfaceType = schema::InterfaceType<'static, String>;
    pub type InterfaceTypeExtension = schema::InterfaceTypeExtension<'static, String>;
    pub type UnionType = schema::UnionType<'static, String>;
    pub type UnionTypeExtension = schema::UnionTypeExtension<'static, String>;
    pub type EnumType = schema::EnumType<'static, String>;
    pub type EnumTypeExtension = schema::EnumTypeExtension<'static, String>;
    pub type EnumValue = schema::EnumValue<'static, String>;
    pub type InputObjectType = schema::InputObjectType<'static, String>;
    pub type InputObjectTypeExtension = schema::InputObjectTypeExtension<'static, String>;
    pub type ScalarType = schema::ScalarType<'static, String>;
    pub type ScalarTypeExtension = schema::ScalarTypeExtension<'static, String>;
    pub type Field = schema::Field<'static, String>;
    pub type InputValue = schema::InputValue<'static, String>;
    pub type Type = schema::Type<'static, String>;
    pub type Value = schema::Value<'static, String>;
    pub type Directive = schema::Directive<'static, String>;
}
