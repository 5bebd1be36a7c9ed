use patch_gate_json_type::ValidatorOptions;
use serde::Deserialize;

/// Gate configuration. Deserializable so it can live in a JSON file next to
/// the schema; every field has a default.
///
/// ```
/// let opts: patch_gate::GateOptions =
///     serde_json::from_str(r#"{"strictPatch": true, "validator": {"allowUnknown": true}}"#).unwrap();
/// assert!(opts.strict_patch);
/// assert!(opts.validator.allow_unknown);
/// assert!(opts.validator.apply_defaults);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GateOptions {
    pub validator: ValidatorOptions,
    /// Run the raw operation validator over a wire-form patch before
    /// decoding it. Only affects [`validate_json_with`](crate::validate_json_with).
    pub strict_patch: bool,
}
