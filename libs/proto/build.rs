use std::io::Result;
use std::path::PathBuf;

/// Regenerates `src/gen` from the `.proto` sources.
///
/// The generated code is checked in so that building the workspace does not
/// require `protoc`. Set `DAPR_PROTO_REGEN=1` (with `protoc` on the PATH) after
/// editing a `.proto` file.
fn main() -> Result<()> {
    println!("cargo:rerun-if-env-changed=DAPR_PROTO_REGEN");

    let proto_root = PathBuf::from("proto");

    let protos = [
        "dapr/proto/common/v1/common.proto",
        "dapr/proto/runtime/v1/dapr.proto",
        "dapr/proto/runtime/v1/appcallback.proto",
    ];

    for proto in &protos {
        println!(
            "cargo:rerun-if-changed={}",
            proto_root.join(proto).display()
        );
    }

    if std::env::var_os("DAPR_PROTO_REGEN").is_none() {
        return Ok(());
    }

    let proto_paths: Vec<PathBuf> = protos.iter().map(|p| proto_root.join(p)).collect();

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .out_dir("src/gen")
        .compile_protos(&proto_paths, &[&proto_root])?;

    Ok(())
}
