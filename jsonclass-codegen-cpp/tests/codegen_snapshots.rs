//! Snapshot and property tests for C++ header generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use jsonclass_codegen::GenerationMode;
use jsonclass_codegen_cpp::{ClassEmitter, EmitOptions};
use serde_json::Value;

fn emit(name: &str, document: &Value, mode: GenerationMode) -> String {
    ClassEmitter::new(EmitOptions::new(mode))
        .emit(name, document)
        .expect("Failed to generate header")
}

fn parse(source: &str) -> Value {
    serde_json::from_str(source).expect("Failed to parse example")
}

#[test]
fn test_person_eager_header() {
    let code = emit(
        "person",
        &parse(r#"{"age": 26, "skill": ["c++","debug"]}"#),
        GenerationMode::Eager,
    );

    insta::assert_snapshot!(code.trim_end(), @r#"
// Generated by jsonclass. DO NOT EDIT.
// Mode: eager
#ifndef person_H_
#define person_H_

#include <map>
#include <nlohmann/json.hpp>
#include <string>
#include <vector>

using json = nlohmann::json;

class person {
 public:
  person() = default;
  person(const json& j) { FromJson(j); }

  void FromJson(const json& j) {
    if (j.contains("age")) {
      age_ = j.at("age").get<int>();
    }
    if (j.contains("skill") && j.at("skill").is_array()) {
      skill_ = j.at("skill").get<std::vector<std::string>>();
    }
  }

  json ToJson() const {
    json j = json::object();
    j["age"] = age_;
    j["skill"] = skill_;
    return j;
  }

 private:
  int age_{26};
  std::vector<std::string> skill_{"c++", "debug"};

 public:
  const int& age() const {
    return age_;
  }

  int& age() {
    return age_;
  }

  void set_age(const int& value) {
    age_ = value;
  }

  const std::vector<std::string>& skill() const {
    return skill_;
  }

  std::vector<std::string>& skill() {
    return skill_;
  }

  void set_skill(const std::vector<std::string>& value) {
    skill_ = value;
  }
};

#endif  // person_H_
"#);
}

#[test]
fn test_nested_record_declared_inside_enclosing_class() {
    let code = emit(
        "report",
        &parse(r#"{"scores": {"Math": 95}}"#),
        GenerationMode::Eager,
    );

    assert!(code.contains("  class scores_type {\n   public:\n    scores_type() = default;\n"));
    assert!(code.contains("    int Math_{95};\n"));
    assert!(code.contains("  scores_type scores_;\n"));
    assert!(code.contains("  const scores_type& scores() const {\n"));
    assert!(code.contains("  void set_scores(const scores_type& value) {\n"));
    assert_eq!(code.matches("class scores_type {").count(), 1);
}

#[test]
fn test_deeply_nested_records_render_innermost_first() {
    let code = emit(
        "root",
        &parse(r#"{"a": {"b": {"c": 1}}, "d": {"e": true}}"#),
        GenerationMode::Eager,
    );

    let b = code.find("class b_type {").unwrap();
    let a = code.find("class a_type {").unwrap();
    let a_member = code.find("b_type b_;").unwrap();
    let d = code.find("class d_type {").unwrap();
    assert!(a < b && b < a_member, "b_type must be defined inside a_type before use");
    assert!(a_member < d, "siblings follow field order");
    assert!(code.contains("\n    class b_type {\n"));
}

#[test]
fn test_reserved_word_key_in_both_modes() {
    for mode in [GenerationMode::Eager, GenerationMode::Lazy] {
        let code = emit("course", &parse(r#"{"class": "A", "new": 1}"#), mode);
        assert!(code.contains("class_rn_"));
        assert!(code.contains("const std::string& class_rn() const {"));
        assert!(code.contains("void set_class_rn(const std::string& value) {"));
        assert!(code.contains("void set_new_rn(const int& value) {"));
        assert!(code.contains(r#""class""#), "JSON key stays unchanged");
        assert!(!code.contains("set_class("));
        assert!(!code.contains(" new_;"));
    }
}

#[test]
fn test_generation_is_deterministic() {
    let document = parse(
        r#"{"name": "hello", "age": 26, "salary": 1500.5, "active": true,
            "skill": ["c++", "debug"], "scores": {"Math": 95, "English": 90}}"#,
    );
    for mode in [GenerationMode::Eager, GenerationMode::Lazy] {
        assert_eq!(emit("person", &document, mode), emit("person", &document, mode));
    }
}

#[test]
fn test_field_order_matches_document_order() {
    let document = parse(r#"{"zulu": 1, "alpha": 2, "mike": 3}"#);
    for mode in [GenerationMode::Eager, GenerationMode::Lazy] {
        let code = emit("ordered", &document, mode);
        for needle in ["zulu_{", "set_zulu", "j[\"zulu\"]"] {
            let z = code.find(needle).unwrap();
            let a = code.find(&needle.replace("zulu", "alpha")).unwrap();
            let m = code.find(&needle.replace("zulu", "mike")).unwrap();
            assert!(z < a && a < m, "{} out of order in {} mode", needle, mode);
        }
    }
}

#[test]
fn test_lazy_header_structure() {
    let code = emit(
        "person",
        &parse(r#"{"age": 26, "skill": ["c++"], "scores": {"Math": 95}}"#),
        GenerationMode::Lazy,
    );

    assert!(code.contains(
        "  void FromJson(const json& j) {\n    age_.reset();\n    skill_.reset();\n    scores_.reset();\n    json_ = j;\n  }\n"
    ));
    assert!(code.contains("  mutable json json_;\n"));
    assert!(code.contains("    mutable json json_;\n"), "nested records keep their own document");
    assert!(code.contains("  mutable std::optional<scores_type> scores_;\n"));
    assert!(code.contains("    j[\"scores\"] = scores().ToJson();\n"));
    assert!(code.contains("    j[\"age\"] = age();\n"));
}

#[test]
fn test_example_defaults_for_every_scalar_kind() {
    let code = emit(
        "defaults",
        &parse(
            r#"{"s": "x\"y", "b": false, "i": -4, "u": 18446744073709551615,
                "f": 0.25, "n": null, "e": [], "m": [[1, 2], [3]]}"#,
        ),
        GenerationMode::Eager,
    );

    assert!(code.contains(r#"std::string s_{"x\"y"};"#));
    assert!(code.contains("bool b_{false};"));
    assert!(code.contains("int i_{-4};"));
    assert!(code.contains("unsigned int u_{4294967295};"));
    assert!(code.contains("double f_{0.250000};"));
    assert!(code.contains("std::string n_{};"));
    assert!(code.contains("std::vector<std::string> e_{};"));
    assert!(code.contains("std::vector<std::vector<int>> m_{{1, 2}, {3}};"));
}

#[test]
fn test_defaults_fit_their_initializers() {
    let document = parse(
        r#"{"id": 3000000000, "big": 18446744073709551615, "ids": [3000000000],
            "tags": [null, null], "tiny": 1e-7}"#,
    );

    let eager = emit("limits", &document, GenerationMode::Eager);
    assert!(eager.contains("int id_{-1294967296};"));
    assert!(eager.contains("unsigned int big_{4294967295};"));
    assert!(eager.contains("std::vector<int> ids_{-1294967296};"));
    assert!(eager.contains("std::vector<std::string> tags_{{}, {}};"));
    assert!(eager.contains("double tiny_{1e-7};"));

    let lazy = emit("limits", &document, GenerationMode::Lazy);
    assert!(lazy.contains("decltype(id_)::value_type{-1294967296}"));
    assert!(lazy.contains("decltype(tags_)::value_type{{}, {}}"));
    assert!(!lazy.contains("3000000000"));
}

#[test]
fn test_invalid_keys_fail_generation() {
    let emitter = ClassEmitter::default();
    assert!(emitter.emit("person", &parse(r#"{"first name": "x"}"#)).is_err());
    assert!(emitter.emit("person", &parse(r#"{"2fa": true}"#)).is_err());
    assert!(emitter.emit("person", &parse(r#"{"a": 1, "a_": 2}"#)).is_err());
    assert!(emitter.emit("person", &parse("[1, 2]")).is_err());
}
