// Approved transaction template script hashes (SHA-256 of the Cadence source,
// lowercase hex). A script whose digest is not in this table is never signed.
pub const CONTRACT_HASH_TOKEN_TRANSFER: &str =
    "ca80b628d985b358ae1cb136bcd976997c942fa10dbabfeafb4e20fa66a5a5e2";
pub const CONTRACT_HASH_CREATE_ACCOUNT: &str =
    "eef2d0494448554177612e63026256258339230cbc6931ded78d6149443c6173";
pub const CONTRACT_HASH_ADD_NEW_KEY: &str =
    "9f2e43f75e6f001879c66b16137e3cddbe3adeb56c1915831022babe84d6b0ee";
