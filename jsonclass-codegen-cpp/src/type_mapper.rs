//! C++ type mapper implementation.

use jsonclass_codegen::TypeMapper;

/// Maps type descriptors to standard-library C++ types.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppTypeMapper;

impl TypeMapper for CppTypeMapper {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn map_bool(&self) -> &'static str {
        "bool"
    }

    fn map_int32(&self) -> &'static str {
        "int"
    }

    fn map_uint32(&self) -> &'static str {
        "unsigned int"
    }

    fn map_float64(&self) -> &'static str {
        "double"
    }

    fn map_string(&self) -> &'static str {
        "std::string"
    }

    fn map_string_map(&self) -> &'static str {
        "std::map<std::string, std::string>"
    }

    fn map_array(&self, inner: &str) -> String {
        format!("std::vector<{}>", inner)
    }
}

#[cfg(test)]
mod tests {
    use jsonclass_codegen::TypeDescriptor;

    use super::*;

    #[test]
    fn test_scalar_types() {
        let mapper = CppTypeMapper;
        assert_eq!(mapper.render_type(&TypeDescriptor::Bool), "bool");
        assert_eq!(mapper.render_type(&TypeDescriptor::Int32), "int");
        assert_eq!(mapper.render_type(&TypeDescriptor::UInt32), "unsigned int");
        assert_eq!(mapper.render_type(&TypeDescriptor::Float64), "double");
        assert_eq!(mapper.render_type(&TypeDescriptor::String), "std::string");
    }

    #[test]
    fn test_composite_types() {
        let mapper = CppTypeMapper;
        assert_eq!(
            mapper.render_type(&TypeDescriptor::array(TypeDescriptor::array(TypeDescriptor::Int32))),
            "std::vector<std::vector<int>>"
        );
        assert_eq!(
            mapper.render_type(&TypeDescriptor::array(TypeDescriptor::StringMap)),
            "std::vector<std::map<std::string, std::string>>"
        );
        assert_eq!(
            mapper.render_type(&TypeDescriptor::nested("scores_type")),
            "scores_type"
        );
        assert_eq!(mapper.language(), "cpp");
    }
}
