use crate::schema::TypeKind;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TypeMergingError {
    #[error(
        "Cannot merge different type categories into common type \"{type_name}\": \
         found {expected} in subgraph \"{expected_subgraph}\" and {found} in subgraph \"{found_subgraph}\""
    )]
    CategoryMismatch {
        type_name: String,
        expected: TypeKind,
        expected_subgraph: String,
        found: TypeKind,
        found_subgraph: String,
    },
    #[error("Multiple canonical definitions for \"{0}\"")]
    MultipleCanonicalDefinitions(String),
    #[error("{message}")]
    FieldConsistency { coordinate: String, message: String },
    #[error("{message}")]
    InputFieldConsistency { coordinate: String, message: String },
    #[error("{message}")]
    InputObjectConsistency { coordinate: String, message: String },
    #[error("Types \"{merged}\" and \"{candidate}\" used by \"{coordinate}\" are not proxiable scalars")]
    ProxiableScalarMismatch {
        coordinate: String,
        merged: String,
        candidate: String,
    },
    #[error("Candidate \"{found}\" cannot be merged into type \"{expected}\"")]
    TypeNameMismatch { expected: String, found: String },
    #[error("Missing required data: {0}")]
    MissingRequiredData(String),
    #[error("Failed to parse schema of subgraph \"{subgraph}\": {message}")]
    SchemaParse { subgraph: String, message: String },
    #[error("Invalid schema of subgraph \"{subgraph}\": {message}")]
    InvalidSubschema { subgraph: String, message: String },
}

impl TypeMergingError {
    /// The schema coordinate (`Type` or `Type.field`) the error is about, when known.
    pub fn coordinate(&self) -> Option<&str> {
        match self {
            TypeMergingError::CategoryMismatch { type_name, .. } => Some(type_name),
            TypeMergingError::MultipleCanonicalDefinitions(coordinate) => Some(coordinate),
            TypeMergingError::FieldConsistency { coordinate, .. }
            | TypeMergingError::InputFieldConsistency { coordinate, .. }
            | TypeMergingError::InputObjectConsistency { coordinate, .. }
            | TypeMergingError::ProxiableScalarMismatch { coordinate, .. } => Some(coordinate),
            TypeMergingError::TypeNameMismatch { expected, .. } => Some(expected),
            TypeMergingError::MissingRequiredData(_)
            | TypeMergingError::SchemaParse { .. }
            | TypeMergingError::InvalidSubschema { .. } => None,
        }
    }
}
