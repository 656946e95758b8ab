use std::rc::Rc;

use hostjs_host::{HostConfig, StdioHost};
use hostjs_rt::rquickjs::Value;
use hostjs_rt::{include_console, Console, Context, Error, Runtime};

#[test]
fn test_script_console_to_stdio() {
    let host = Rc::new(StdioHost::with_writers(
        HostConfig::default(),
        Vec::new(),
        Vec::new(),
    ));
    let rt = Runtime::new().unwrap();
    let ctx = Context::new(&rt).unwrap();
    ctx.with(|ctx| include_console(&ctx, host.clone()).map(|_| ()))
        .unwrap();

    ctx.eval(
        r#"
        console.log("Hello World!", 42, 23);
        console.error("failed:", [1, 2]);
        console.warn(1.5, true);
        console.log();
        "#,
    )
    .unwrap();

    drop(ctx);
    drop(rt);
    let (out, err) = Rc::try_unwrap(host).unwrap().into_writers();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Hello World! 42 23\nERROR: failed: 1,2\nWARNING: 1.5 true\n\n"
    );
    assert!(err.is_empty());
}

#[test]
fn test_script_console_broken_writer() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let host = Rc::new(StdioHost::with_writers(HostConfig::default(), Broken, Vec::new()));
    let rt = Runtime::new().unwrap();
    let ctx = Context::new(&rt).unwrap();
    ctx.with(|ctx| include_console(&ctx, host.clone()).map(|_| ()))
        .unwrap();
    match ctx.eval("console.log('lost')") {
        Err(Error::Host(_)) => {}
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_rust_console_to_stdio() {
    let rt = Runtime::new().unwrap();
    let ctx = Context::new(&rt).unwrap();
    let config = HostConfig::from_json(r#"{"diagnostics_to_stderr": true}"#).unwrap();
    let console = Console::new(StdioHost::with_writers(config, Vec::new(), Vec::new()));
    ctx.with(|ctx| {
        let args: Vec<Value> = ctx.eval(r#"["x", 1]"#).unwrap();
        console.log(&ctx, &args).unwrap();
        let args: Vec<Value> = ctx.eval(r#"["y"]"#).unwrap();
        console.warn(&ctx, &args).unwrap();
    });

    let (out, err) = console.into_host().into_writers();
    assert_eq!(String::from_utf8(out).unwrap(), "x 1\n");
    assert_eq!(String::from_utf8(err).unwrap(), "WARNING: y\n");
}
