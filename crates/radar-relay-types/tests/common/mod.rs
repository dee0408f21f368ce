/*
[INPUT]:  Test scenario requirements
[OUTPUT]: Shared JSON fixtures for orders, books and events
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for radar-relay-types tests

use serde_json::{Value, json};

pub const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
pub const DAI: &str = "0x89d24a6b4ccb1b6faa2625fe562bdd9a23260359";

/// A maker-signed 0x order as produced by the signing component
pub fn signed_order() -> Value {
    json!({
        "maker": "0x5409ed021d9299bf6814279a6a1411a7e866a631",
        "taker": "0x0000000000000000000000000000000000000000",
        "makerFee": "0",
        "takerFee": "0",
        "makerTokenAmount": "1000000000000000000",
        "takerTokenAmount": "700000000000000000000",
        "makerTokenAddress": WETH,
        "takerTokenAddress": DAI,
        "salt": "71085393685509346151917468624418296458473733215438466519470582015034458960862",
        "exchangeContractAddress": "0x12459c951127e0c374ff9105dda097662a027093",
        "feeRecipient": "0xa258b39954cef5cb142fd567a46cddb31a670124",
        "expirationUnixTimestampSec": "1527000000",
        "ecSignature": {
            "v": 27,
            "r": "0x61a3ed31b43c8780e905a260a35faefcc527be7516aa11c0256729b5b351bc33",
            "s": "0x40349190569279751135161d22529dc25add4f6069af05be04cacbda2ace2254"
        }
    })
}

/// A relay order on the given side with the given price
pub fn radar_order(hash: &str, side: &str, price: &str, state: &str) -> Value {
    json!({
        "orderHash": hash,
        "type": side,
        "state": state,
        "baseTokenAddress": WETH,
        "quoteTokenAddress": DAI,
        "remainingBaseTokenAmount": "1",
        "remainingQuoteTokenAmount": price,
        "price": price,
        "createdDate": "1526000000",
        "signedOrder": signed_order()
    })
}

pub fn book(bids: Vec<Value>, asks: Vec<Value>) -> Value {
    json!({
        "baseTokenAddress": WETH,
        "quoteTokenAddress": DAI,
        "bids": bids,
        "asks": asks
    })
}

pub fn fill_event() -> Value {
    json!({
        "baseTokenAddress": WETH,
        "quoteTokenAddress": DAI,
        "transactionHash": "0x2b9f3b0ab5c3c1e2d4a4e5e0f6f1b0a0c0d0e0f0a1b2c3d4e5f60718293a4b5c",
        "type": "BUY",
        "blockNumber": 5600000,
        "maker": "0x5409ed021d9299bf6814279a6a1411a7e866a631",
        "taker": "0x6ecbe1db9ef729cbe972c83fb886247691fb6beb",
        "feeRecipient": "0xa258b39954cef5cb142fd567a46cddb31a670124",
        "paidMakerFee": "0",
        "paidTakerFee": "0.000000000000000001",
        "filledBaseTokenAmount": "0.5",
        "filledQuoteTokenAmount": "350.25",
        "orderHash": "0xorder1",
        "timestamp": 1526000100,
        "outlier": false
    })
}
