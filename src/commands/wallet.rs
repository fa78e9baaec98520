use super::{report, Session};
use crate::models::{Denomination, WalletState};
use crate::utils::format_amount;

fn balance_lines(wallet: &WalletState) -> String {
    [Denomination::Eth, Denomination::Memex, Denomination::Area]
        .iter()
        .map(|d| format!("  {:<7} {}", d.ticker(), format_amount(wallet.balance.get(*d))))
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn connect(session: &Session) -> Result<String, String> {
    println!("⏳ Connecting wallet...");
    let wallet = session
        .store
        .connect()
        .await
        .map_err(|e| report(e, "Wallet connection"))?;

    let address = wallet.address.as_ref().map(|a| a.short()).unwrap_or_default();
    Ok(format!(
        "✅ Wallet connected: {}\n{}",
        address,
        balance_lines(&wallet)
    ))
}

pub async fn disconnect(session: &Session) -> Result<String, String> {
    session
        .store
        .disconnect()
        .await
        .map_err(|e| report(e, "Disconnect"))?;
    Ok("👋 Wallet disconnected".to_string())
}

pub async fn balance(session: &Session) -> Result<String, String> {
    let wallet = session.store.wallet().await;
    let Some(address) = wallet.actor() else {
        return Err("Please connect your wallet first".to_string());
    };
    let mut out = format!("💰 Balances for {}\n{}", address.short(), balance_lines(&wallet));
    if session.store.is_busy() {
        out.push_str("\n⏳ A transaction is still processing");
    }
    Ok(out)
}
