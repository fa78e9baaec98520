/// Command reference printed by `help`
pub fn text() -> String {
    let sections: &[(&str, &[&str])] = &[
        (
            "👛 Wallet",
            &[
                "connect - Connect a wallet",
                "disconnect - Forget the connected wallet",
                "balance - Show wallet balances",
            ],
        ),
        (
            "🛒 Marketplace",
            &[
                "browse [search=..] [category=..] [rarity=..] [sort=..] [page=N] - Items for sale",
                "show <id> - Item details",
                "buy <id> [memex|area] - Buy an item (default: memex)",
            ],
        ),
        (
            "🎨 Selling",
            &[
                "list <title> | <description> | <category> | <rarity> | <memex> | <area> [| <image>] - List a new item",
                "price <id> <memex> <area> - Change the price of an owned item",
                "relist <id> <memex> <area> - Put an owned item back on sale",
                "delist <id> - Remove an owned item from sale",
            ],
        ),
        (
            "📜 Account",
            &[
                "mine - Items you own",
                "profile - Holdings overview",
                "history [page] - Your transactions",
            ],
        ),
        ("🎯 General", &["help - Show this message", "quit - Leave"]),
    ];

    let mut out = String::from("📖 Memex Market Commands\n");
    for (title, lines) in sections {
        out.push('\n');
        out.push_str(title);
        out.push('\n');
        for line in lines.iter() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("\nSort keys: newest, oldest, price-low, price-high, popular");
    out
}
