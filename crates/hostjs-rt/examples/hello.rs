use std::rc::Rc;

use hostjs_rt::{include_console, Context, Error, HostPrimitives, Runtime};

struct Stdout;

impl HostPrimitives for Stdout {
    fn print(&self, msg: &str) -> Result<(), Error> {
        println!("{}", msg);
        Ok(())
    }

    fn error(&self, msg: &str) -> Result<(), Error> {
        println!("ERROR: {}", msg);
        Ok(())
    }

    fn warn(&self, msg: &str) -> Result<(), Error> {
        println!("WARNING: {}", msg);
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let rt = Runtime::new().unwrap();
    let ctx = Context::new(&rt).unwrap();
    ctx.with(|ctx| include_console(&ctx, Rc::new(Stdout)).map(|_| ()))
        .unwrap();
    let rv = ctx.eval("console.log(\"Hello World!\", 42, 23)");
    let _ = dbg!(rv);
}
