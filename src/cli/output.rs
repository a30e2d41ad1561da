use anyhow::Result;
use dialpick::PickOutcome;
use serde_json::json;

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &PickOutcome) {
	if !outcome.accepted {
		println!("Selection cancelled");
		return;
	}
	println!("{}", outcome.country);
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"changed": outcome.changed,
		"country": {
			"name": outcome.country.name,
			"dial_code": outcome.country.dial_code,
			"flag": outcome.country.flag,
		},
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(outcome: &PickOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use dialpick::Country;
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_country() {
		let outcome = PickOutcome {
			accepted: true,
			changed: true,
			country: Country::new("Japan", "+81", ""),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["changed"], true);
		assert_eq!(value["country"]["dial_code"], "+81");
		insta::assert_snapshot!(json, @r#"
		{
		  "accepted": true,
		  "changed": true,
		  "country": {
		    "dial_code": "+81",
		    "flag": "",
		    "name": "Japan"
		  }
		}
		"#);
	}
}
