use azrm_sdk::polymorphic::{decode_slice, Polymorphic};
use azrm_sdk::{open_enum, polymorphic_union};
use serde::{Deserialize, Serialize};
use serde_json::json;

open_enum! {
    pub enum Compression {
        Gzip = "GZip",
        Deflate = "Deflate",
    }
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct SettingsBase {
    #[serde(rename = "type", default)]
    pub type_: String,
}

#[serde_with::skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZipSettings {
    #[serde(flatten)]
    pub base: SettingsBase,
    pub preserve_zip_file_name_as_folder: Option<bool>,
    pub compression: Option<Compression>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TarSettings {
    #[serde(flatten)]
    pub base: SettingsBase,
}

polymorphic_union! {
    /// declared outside the sdk crate
    pub enum Settings: SettingsBase {
        Zip(ZipSettings) = "ZipDeflateReadSettings",
        Tar(TarSettings) = "TarReadSettings",
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
struct Holder {
    settings: Option<Settings>,
    #[serde(default)]
    many: Vec<Settings>,
}

#[test]
fn test_macros_usable_from_other_crates() -> anyhow::Result<()> {
    assert_eq!(Settings::NAME, "Settings");
    assert_eq!(Settings::variants().len(), 2);

    let holder: Holder = serde_json::from_value(json!({
        "settings": {"type": "zipdeflatereadsettings", "compression": "gzip"},
        "many": [{"type": "TarReadSettings"}, {"type": "SevenZipReadSettings", "level": 9}],
    }))?;
    let Some(Settings::Zip(zip)) = &holder.settings else {
        panic!("expected zip settings: {holder:?}");
    };
    assert_eq!(zip.compression, Some(Compression::Gzip));
    assert_eq!(holder.many[0].discriminator(), "TarReadSettings");
    assert!(holder.many[1].is_raw());

    let encoded = serde_json::to_value(&holder)?;
    assert_eq!(
        encoded,
        json!({
            "settings": {"type": "ZipDeflateReadSettings", "compression": "GZip"},
            "many": [{"type": "TarReadSettings"}, {"type": "SevenZipReadSettings", "level": 9}],
        })
    );
    Ok(())
}

#[test]
fn test_null_union_field_is_none() -> anyhow::Result<()> {
    let holder: Holder = serde_json::from_value(json!({"settings": null}))?;
    assert_eq!(holder.settings, None);
    assert!(decode_slice::<Settings>(b"null")?.is_none());
    Ok(())
}
