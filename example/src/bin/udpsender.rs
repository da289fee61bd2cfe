use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::UdpSocket,
};

const DEFAULT_ADDR: &str = "127.0.0.1:42069";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let addr = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_ADDR.into());

    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.connect(&addr).await?;
    log::info!("sending to {}", socket.peer_addr()?);

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut line = String::new();

    loop {
        stdout.write_all(b">").await?;
        stdout.flush().await?;

        line.clear();
        if stdin.read_line(&mut line).await? == 0 {
            log::info!("stdin closed");
            return Ok(());
        }

        if let Err(err) = socket.send(line.as_bytes()).await {
            log::error!("failed to send datagram: {err}");
            return Err(err);
        }
    }
}
