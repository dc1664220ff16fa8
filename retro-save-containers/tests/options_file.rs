use std::fs;

use retro_save_containers::{CodecOptions, ContainerError, ContainerFormat, describe};
use tempfile::TempDir;

const SNES_MAGIC: [u8; 8] = [0xC1, 0x35, 0x86, 0xA5, 0x65, 0xCB, 0x94, 0x2C];

#[test]
fn options_loaded_from_toml_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("codec.toml");
    fs::write(
        &path,
        "filename = \"zelda.ves\"\n\n[snes]\npreset_id = 4660\nupdate_size_kib = true\n",
    )
    .unwrap();

    let opts = CodecOptions::from_toml_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(opts.filename.as_deref(), Some("zelda.ves"));

    let mut container = vec![0u8; 48 + 2048];
    container[0x10..0x18].copy_from_slice(&SNES_MAGIC);
    let out = ContainerFormat::WiiUSnes3ds
        .inject(&container, &[0x01; 8192], &opts)
        .unwrap();
    assert_eq!(&out[0x04..0x06], &[0x34, 0x12]);
    assert_eq!(&out[0x18..0x1A], &[8, 0]);
}

#[test]
fn xps_filename_blocks_sharkport() {
    let opts = CodecOptions::from_toml_str("filename = \"backup.xps\"").unwrap();
    assert!(matches!(
        ContainerFormat::SharkPort.decode(&[0u8; 64], &opts),
        Err(ContainerError::UnsupportedVariant(_))
    ));
}

#[test]
fn container_info_serializes() {
    let mut container = b"ADVSAVEG".to_vec();
    container.resize(0x430, 0);
    container.extend_from_slice(b"123456789");

    let info = describe(ContainerFormat::GsSp, &container, &CodecOptions::default()).unwrap();
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["format"], "gs-sp");
    assert_eq!(json["payload_size"], 9);
    assert_eq!(json["payload_crc32"], "cbf43926");
}
