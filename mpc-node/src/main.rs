#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let _rocket = mpc_node::build_rocket().launch().await?;
    Ok(())
}
