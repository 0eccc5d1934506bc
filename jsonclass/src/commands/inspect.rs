use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use jsonclass_codegen::{RecordBlueprint, RecordBuilder, schema::BlueprintTreeDisplay};
use jsonclass_codegen_cpp::CPP_NAMING;

use super::UnwrapOrExit;
use crate::input::ExampleInput;

#[derive(Args)]
pub struct InspectCommand {
    /// Example file: a '#<name>' line followed by a JSON document
    pub file: PathBuf,

    /// Print the blueprint tree as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let input = ExampleInput::open(&self.file).unwrap_or_exit();
        let blueprint = RecordBuilder::new(&CPP_NAMING)
            .build_root(&input.name, &input.document)
            .unwrap_or_exit();

        print!("{}", self.render(&blueprint)?);
        Ok(())
    }

    fn render(&self, blueprint: &RecordBlueprint) -> Result<String> {
        if self.json {
            let json = serde_json::to_string_pretty(blueprint)
                .wrap_err("Failed to serialize blueprint")?;
            return Ok(format!("{}\n", json));
        }

        let mut out = BlueprintTreeDisplay::new(blueprint).to_string();
        out.push_str(&format!(
            "\n{} record(s), depth {}\n",
            blueprint.record_count(),
            blueprint.depth()
        ));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn blueprint() -> RecordBlueprint {
        RecordBuilder::new(&CPP_NAMING)
            .build_root("person", &json!({"class": "A", "scores": {"Math": 95}}))
            .unwrap()
    }

    #[test]
    fn test_tree_output() {
        let cmd = InspectCommand {
            file: PathBuf::from("person.json"),
            json: false,
        };
        let text = cmd.render(&blueprint()).unwrap();
        assert!(text.starts_with("person\n"));
        assert!(text.contains("class (class_rn): string"));
        assert!(text.contains("Math: int32 = 95"));
        assert!(text.ends_with("\n2 record(s), depth 2\n"));
    }

    #[test]
    fn test_json_output() {
        let cmd = InspectCommand {
            file: PathBuf::from("person.json"),
            json: true,
        };
        let text = cmd.render(&blueprint()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "person");
        assert_eq!(value["fields"][0]["safe_identifier"], "class_rn");
        assert_eq!(value["nested_records"][0]["name"], "scores_type");
    }
}
