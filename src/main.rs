use api::{service, Booth};
use booth::{identity::Random, seed, Session};
use core::convert::Infallible;
use http_body_util::Full;
use hyper::{server::conn::http1, service::service_fn, Response};
use hyper_util::rt::TokioIo;
use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tokio::{net::TcpListener, runtime::Runtime};

/// Demo polls are seeded unless `SEED_DEMO` is explicitly switched off.
fn seeds_demo(flag: Option<&str>) -> bool {
    !matches!(flag, Some("0" | "false"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse environment variables
    let port: u16 = env::var("PORT")?.parse()?;
    let seed_demo = seeds_demo(env::var("SEED_DEMO").ok().as_deref());

    // Initialize the demo session
    let polls = if seed_demo { seed::demo_polls(chrono::Utc::now())? } else { Vec::new() };
    log::info!("starting with {} poll(s)", polls.len());
    let booth = Arc::new(Booth::from(Session::with_polls(Random, polls)));

    let runtime = Runtime::new()?;
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = runtime.block_on(TcpListener::bind(addr))?;
    log::info!("listening on {addr}");

    runtime.block_on(async move {
        let stop = tokio::signal::ctrl_c();
        tokio::pin!(stop);

        loop {
            let (stream, peer) = tokio::select! {
                biased;
                res = &mut stop => {
                    res?;
                    break;
                }
                conn = listener.accept() => conn?,
            };

            let booth = booth.clone();
            tokio::spawn(async move {
                let service = service_fn(move |req| {
                    let booth = booth.clone();
                    async move {
                        let res = match service::try_respond(req, &booth).await {
                            Ok(res) => res,
                            Err(code) => {
                                let mut res = Response::new(Full::default());
                                *res.status_mut() = code;
                                res
                            }
                        };
                        Ok::<_, Infallible>(res)
                    }
                });

                let io = TokioIo::new(stream);
                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    log::error!("connection with {peer} failed: {err}");
                }
            });
        }

        log::info!("shutting down");
        anyhow::Ok(())
    })
}
