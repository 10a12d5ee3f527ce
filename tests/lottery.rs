use cosmwasm_std::{coins, Addr, Empty, Uint128, Uint64};
use cw_multi_test::{App, AppBuilder, Contract, ContractWrapper, Executor};

use cw_world_lotto::contract;
use cw_world_lotto::models::{Config, Country, MarketingInfo, Pick, PrizeTier, RoundStatus, Token};
use cw_world_lotto::msg::{
  AccountView, ClaimView, DrawingView, ExecuteMsg, InstantiateMsg, MatchResult, QueryMsg,
  RoundView,
};

const DENOM: &str = "ujuno";
const ADMIN: &str = "admin";
const ALICE: &str = "alice";
const BOB: &str = "bob";

const PRICE: u128 = 100;
const ROUND_SECONDS: u64 = 3600;
const JACKPOT_SEED: u128 = 10_000;
const INITIAL_BALANCE: u128 = 1_000_000;
const PRIZE_FLOAT: u128 = 100_000;

fn lotto_contract() -> Box<dyn Contract<Empty>> {
  Box::new(ContractWrapper::new(
    contract::execute,
    contract::instantiate,
    contract::query,
  ))
}

fn pick(
  country: &str,
  number: u16,
) -> Pick {
  Pick {
    country: country.to_string(),
    number,
  }
}

fn default_config() -> Config {
  Config {
    token: Token::Native {
      denom: DENOM.to_string(),
    },
    price: Uint128::from(PRICE),
    countries: vec![
      Country {
        code: "CA".to_string(),
        total_numbers: 50,
      },
      Country {
        code: "MX".to_string(),
        total_numbers: 50,
      },
      Country {
        code: "GB".to_string(),
        total_numbers: 50,
      },
      Country {
        code: "FR".to_string(),
        total_numbers: 20,
      },
    ],
    bonus_code: "FR".to_string(),
    prize_tiers: vec![
      PrizeTier {
        matches: 4,
        amount: Uint128::zero(),
      },
      PrizeTier {
        matches: 3,
        amount: Uint128::from(1_000u128),
      },
      PrizeTier {
        matches: 2,
        amount: Uint128::from(250u128),
      },
      PrizeTier {
        matches: 1,
        amount: Uint128::from(50u128),
      },
    ],
    round_seconds: Uint64::from(ROUND_SECONDS),
    jackpot_seed: Uint128::from(JACKPOT_SEED),
    // 10% of every sale feeds the jackpot
    jackpot_sales_pct: Uint128::from(100_000u128),
    use_approval: false,
    marketing: MarketingInfo {
      name: "World Lotto".to_string(),
      description: None,
    },
  }
}

fn setup(config: Config) -> (App, Addr) {
  let mut app = AppBuilder::new().build(|router, _api, storage| {
    for wallet in [ADMIN, ALICE, BOB] {
      router
        .bank
        .init_balance(
          storage,
          &Addr::unchecked(wallet),
          coins(INITIAL_BALANCE, DENOM),
        )
        .unwrap();
    }
  });

  let code_id = app.store_code(lotto_contract());
  let contract_addr = app
    .instantiate_contract(
      code_id,
      Addr::unchecked(ADMIN),
      &InstantiateMsg {
        owner: None,
        config,
      },
      &coins(PRIZE_FLOAT, DENOM),
      "world-lotto",
      None,
    )
    .unwrap();

  (app, contract_addr)
}

fn advance_past_round_end(app: &mut App) {
  app.update_block(|block| {
    block.time = block.time.plus_seconds(ROUND_SECONDS + 1);
    block.height += 1;
  });
}

fn buy(
  app: &mut App,
  contract_addr: &Addr,
  wallet: &str,
  tickets: Vec<Vec<Pick>>,
) -> anyhow::Result<cw_multi_test::AppResponse> {
  let funds = coins(PRICE * tickets.len() as u128, DENOM);
  app.execute_contract(
    Addr::unchecked(wallet),
    contract_addr.clone(),
    &ExecuteMsg::Buy { tickets },
    &funds,
  )
}

fn balance_of(
  app: &App,
  wallet: &str,
) -> u128 {
  app
    .wrap()
    .query_balance(wallet, DENOM)
    .unwrap()
    .amount
    .u128()
}

#[test]
fn instantiate_and_query_initial_state() {
  let (app, contract_addr) = setup(default_config());

  let config: Config = app
    .wrap()
    .query_wasm_smart(contract_addr.clone(), &QueryMsg::Config {})
    .unwrap();
  assert_eq!(config, default_config());

  let round: RoundView = app
    .wrap()
    .query_wasm_smart(contract_addr.clone(), &QueryMsg::Round {})
    .unwrap();
  assert_eq!(round.round_no, Uint64::one());
  assert_eq!(round.status, RoundStatus::Active);
  assert_eq!(round.ticket_count, 0);
  assert_eq!(round.jackpot, Uint128::from(JACKPOT_SEED));

  let ready: bool = app
    .wrap()
    .query_wasm_smart(contract_addr, &QueryMsg::Ready {})
    .unwrap();
  assert!(!ready);
}

#[test]
fn buy_rejects_malformed_tickets() {
  let (mut app, contract_addr) = setup(default_config());

  let err = buy(&mut app, &contract_addr, ALICE, vec![vec![pick("ZZ", 1)]]).unwrap_err();
  assert_eq!(err.root_cause().to_string(), "UnknownCountry");

  let err = buy(&mut app, &contract_addr, ALICE, vec![vec![pick("CA", 0)]]).unwrap_err();
  assert_eq!(err.root_cause().to_string(), "NumberOutOfBounds");

  let err = buy(&mut app, &contract_addr, ALICE, vec![vec![pick("CA", 51)]]).unwrap_err();
  assert_eq!(err.root_cause().to_string(), "NumberOutOfBounds");

  let err = buy(
    &mut app,
    &contract_addr,
    ALICE,
    vec![vec![pick("CA", 1), pick("CA", 2)]],
  )
  .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "DuplicateCountry");

  // Holding the same ticket twice within one round is not allowed.
  let err = buy(
    &mut app,
    &contract_addr,
    ALICE,
    vec![vec![pick("CA", 1)], vec![pick("CA", 1)]],
  )
  .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "TicketExists");

  // Underpaying is rejected.
  let err = app
    .execute_contract(
      Addr::unchecked(ALICE),
      contract_addr,
      &ExecuteMsg::Buy {
        tickets: vec![vec![pick("CA", 1)]],
      },
      &coins(PRICE - 1, DENOM),
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "InsufficientFunds");
}

#[test]
fn post_results_requires_owner_and_round_end() {
  let (mut app, contract_addr) = setup(default_config());
  let numbers = vec![pick("CA", 12), pick("MX", 30), pick("GB", 7), pick("FR", 5)];

  let err = app
    .execute_contract(
      Addr::unchecked(ALICE),
      contract_addr.clone(),
      &ExecuteMsg::PostResults {
        numbers: Some(numbers.clone()),
      },
      &[],
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "NotAuthorized");

  let err = app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr.clone(),
      &ExecuteMsg::PostResults {
        numbers: Some(numbers.clone()),
      },
      &[],
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "ActiveRound");

  advance_past_round_end(&mut app);

  let ready: bool = app
    .wrap()
    .query_wasm_smart(contract_addr.clone(), &QueryMsg::Ready {})
    .unwrap();
  assert!(ready);

  // The first call must carry the winning numbers.
  let err = app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr.clone(),
      &ExecuteMsg::PostResults { numbers: None },
      &[],
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "ValidationError");

  app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr.clone(),
      &ExecuteMsg::PostResults {
        numbers: Some(numbers.clone()),
      },
      &[],
    )
    .unwrap();

  let drawing: Option<DrawingView> = app
    .wrap()
    .query_wasm_smart(
      contract_addr.clone(),
      &QueryMsg::Drawing {
        round_no: Uint64::one(),
      },
    )
    .unwrap();
  let drawing = drawing.unwrap();
  assert!(drawing.is_complete);
  assert_eq!(drawing.winning_numbers, numbers);
  assert_eq!(drawing.ticket_count, 0);

  // A fresh round has opened.
  let round: RoundView = app
    .wrap()
    .query_wasm_smart(contract_addr, &QueryMsg::Round {})
    .unwrap();
  assert_eq!(round.round_no, Uint64::from(2u64));
  assert_eq!(round.status, RoundStatus::Active);
}

#[test]
fn full_round_lifecycle_scores_and_pays() {
  let (mut app, contract_addr) = setup(default_config());

  // Ticket A: CA hits, MX misses, bonus hits exactly -> 2 matches.
  buy(
    &mut app,
    &contract_addr,
    ALICE,
    vec![vec![pick("CA", 12), pick("MX", 9), pick("FR", 5)]],
  )
  .unwrap();

  // Ticket B: both standard picks land on winning values -> 2 matches.
  buy(
    &mut app,
    &contract_addr,
    BOB,
    vec![vec![pick("CA", 30), pick("MX", 12), pick("FR", 9)]],
  )
  .unwrap();

  // Sales feed the jackpot: seed + 10% of two tickets.
  let round: RoundView = app
    .wrap()
    .query_wasm_smart(contract_addr.clone(), &QueryMsg::Round {})
    .unwrap();
  assert_eq!(round.ticket_count, 2);
  assert_eq!(round.jackpot, Uint128::from(JACKPOT_SEED + 20));

  advance_past_round_end(&mut app);
  app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr.clone(),
      &ExecuteMsg::PostResults {
        numbers: Some(vec![pick("CA", 12), pick("MX", 30), pick("FR", 5)]),
      },
      &[],
    )
    .unwrap();

  let drawing: Option<DrawingView> = app
    .wrap()
    .query_wasm_smart(
      contract_addr.clone(),
      &QueryMsg::Drawing {
        round_no: Uint64::one(),
      },
    )
    .unwrap();
  let drawing = drawing.unwrap();
  assert!(drawing.is_complete);
  assert_eq!(drawing.processed_ticket_count, 2);
  assert_eq!(drawing.match_counts, vec![0, 0, 2, 0, 0]);
  assert_eq!(drawing.jackpot, Uint128::from(JACKPOT_SEED + 20));

  // Nobody hit the jackpot tier, so the pot rolls into round 2.
  let round: RoundView = app
    .wrap()
    .query_wasm_smart(contract_addr.clone(), &QueryMsg::Round {})
    .unwrap();
  assert_eq!(round.jackpot, Uint128::from(JACKPOT_SEED + 20));

  // Ticket C scored on demand: only the bonus hits.
  let result: MatchResult = app
    .wrap()
    .query_wasm_smart(
      contract_addr.clone(),
      &QueryMsg::Evaluate {
        ticket: vec![pick("CA", 1), pick("MX", 2), pick("FR", 5)],
        round_no: None,
      },
    )
    .unwrap();
  assert_eq!(result.round_no, Uint64::one());
  assert_eq!(result.match_count, 1);
  assert_eq!(result.prize, Uint128::from(50u128));

  // Two matches pay the 250 tier.
  let before = balance_of(&app, ALICE);
  app
    .execute_contract(
      Addr::unchecked(ALICE),
      contract_addr.clone(),
      &ExecuteMsg::Claim {
        round_no: Uint64::one(),
      },
      &[],
    )
    .unwrap();
  assert_eq!(balance_of(&app, ALICE), before + 250);

  let err = app
    .execute_contract(
      Addr::unchecked(ALICE),
      contract_addr.clone(),
      &ExecuteMsg::Claim {
        round_no: Uint64::one(),
      },
      &[],
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "AlreadyClaimed");

  // A wallet without winnings has nothing to claim.
  let err = app
    .execute_contract(
      Addr::unchecked("carol"),
      contract_addr.clone(),
      &ExecuteMsg::Claim {
        round_no: Uint64::one(),
      },
      &[],
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "ClaimNotFound");

  let account: Option<AccountView> = app
    .wrap()
    .query_wasm_smart(
      contract_addr,
      &QueryMsg::Account {
        address: Addr::unchecked(ALICE),
      },
    )
    .unwrap();
  let account = account.unwrap();
  assert_eq!(account.totals.tickets, 1);
  assert_eq!(account.totals.wins, 1);
  assert_eq!(account.totals.amount_won, Uint128::from(250u128));
  assert_eq!(account.claims.len(), 1);
  assert!(account.claims[0].is_paid);
}

#[test]
fn repeated_winning_value_scores_once_end_to_end() {
  let (mut app, contract_addr) = setup(default_config());

  buy(
    &mut app,
    &contract_addr,
    ALICE,
    vec![vec![pick("CA", 7), pick("MX", 7)]],
  )
  .unwrap();

  advance_past_round_end(&mut app);
  app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr.clone(),
      &ExecuteMsg::PostResults {
        numbers: Some(vec![pick("CA", 7), pick("MX", 7), pick("FR", 5)]),
      },
      &[],
    )
    .unwrap();

  // Two countries drew 7, but the value is one winning ball.
  let result: MatchResult = app
    .wrap()
    .query_wasm_smart(
      contract_addr,
      &QueryMsg::Evaluate {
        ticket: vec![pick("CA", 7), pick("MX", 7)],
        round_no: Some(Uint64::one()),
      },
    )
    .unwrap();
  assert_eq!(result.match_count, 1);
}

#[test]
fn jackpot_claim_waits_for_approval() {
  let mut config = default_config();
  config.use_approval = true;
  let (mut app, contract_addr) = setup(config);

  buy(
    &mut app,
    &contract_addr,
    ALICE,
    vec![vec![pick("CA", 12), pick("MX", 30), pick("GB", 7), pick("FR", 5)]],
  )
  .unwrap();

  advance_past_round_end(&mut app);
  app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr.clone(),
      &ExecuteMsg::PostResults {
        numbers: Some(vec![pick("CA", 12), pick("MX", 30), pick("GB", 7), pick("FR", 5)]),
      },
      &[],
    )
    .unwrap();

  let drawing: Option<DrawingView> = app
    .wrap()
    .query_wasm_smart(
      contract_addr.clone(),
      &QueryMsg::Drawing {
        round_no: Uint64::one(),
      },
    )
    .unwrap();
  assert_eq!(drawing.unwrap().match_counts, vec![0, 0, 0, 0, 1]);

  // The jackpot tier was hit, so the next round's pot is back to the seed.
  let round: RoundView = app
    .wrap()
    .query_wasm_smart(contract_addr.clone(), &QueryMsg::Round {})
    .unwrap();
  assert_eq!(round.jackpot, Uint128::from(JACKPOT_SEED));

  let jackpot_payout = JACKPOT_SEED + 10; // seed + 10% of one ticket

  // First contact records the claim but pays nothing.
  let before = balance_of(&app, ALICE);
  app
    .execute_contract(
      Addr::unchecked(ALICE),
      contract_addr.clone(),
      &ExecuteMsg::Claim {
        round_no: Uint64::one(),
      },
      &[],
    )
    .unwrap();
  assert_eq!(balance_of(&app, ALICE), before);

  let pending: Vec<ClaimView> = app
    .wrap()
    .query_wasm_smart(contract_addr.clone(), &QueryMsg::ClaimsPendingApproval {})
    .unwrap();
  assert_eq!(pending.len(), 1);
  assert_eq!(pending[0].owner, Addr::unchecked(ALICE));
  assert_eq!(pending[0].amount, Uint128::from(jackpot_payout));
  assert_eq!(pending[0].jackpot_ticket_count, 1);

  let err = app
    .execute_contract(
      Addr::unchecked(ALICE),
      contract_addr.clone(),
      &ExecuteMsg::Claim {
        round_no: Uint64::one(),
      },
      &[],
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "PendingApproval");

  let err = app
    .execute_contract(
      Addr::unchecked(BOB),
      contract_addr.clone(),
      &ExecuteMsg::Approve {
        address: Addr::unchecked(ALICE),
        round_no: Uint64::one(),
      },
      &[],
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "NotAuthorized");

  app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr.clone(),
      &ExecuteMsg::Approve {
        address: Addr::unchecked(ALICE),
        round_no: Uint64::one(),
      },
      &[],
    )
    .unwrap();

  let err = app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr.clone(),
      &ExecuteMsg::Approve {
        address: Addr::unchecked(ALICE),
        round_no: Uint64::one(),
      },
      &[],
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "AlreadyApproved");

  let before = balance_of(&app, ALICE);
  app
    .execute_contract(
      Addr::unchecked(ALICE),
      contract_addr,
      &ExecuteMsg::Claim {
        round_no: Uint64::one(),
      },
      &[],
    )
    .unwrap();
  assert_eq!(balance_of(&app, ALICE), before + jackpot_payout);
}

#[test]
fn rejected_claim_is_terminal() {
  let mut config = default_config();
  config.use_approval = true;
  let (mut app, contract_addr) = setup(config);

  buy(
    &mut app,
    &contract_addr,
    ALICE,
    vec![vec![pick("CA", 12), pick("MX", 30), pick("GB", 7), pick("FR", 5)]],
  )
  .unwrap();

  advance_past_round_end(&mut app);
  app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr.clone(),
      &ExecuteMsg::PostResults {
        numbers: Some(vec![pick("CA", 12), pick("MX", 30), pick("GB", 7), pick("FR", 5)]),
      },
      &[],
    )
    .unwrap();

  app
    .execute_contract(
      Addr::unchecked(ALICE),
      contract_addr.clone(),
      &ExecuteMsg::Claim {
        round_no: Uint64::one(),
      },
      &[],
    )
    .unwrap();

  app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr.clone(),
      &ExecuteMsg::Reject {
        address: Addr::unchecked(ALICE),
        round_no: Uint64::one(),
      },
      &[],
    )
    .unwrap();

  let err = app
    .execute_contract(
      Addr::unchecked(ALICE),
      contract_addr.clone(),
      &ExecuteMsg::Claim {
        round_no: Uint64::one(),
      },
      &[],
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "AlreadyClaimed");

  let pending: Vec<ClaimView> = app
    .wrap()
    .query_wasm_smart(contract_addr, &QueryMsg::ClaimsPendingApproval {})
    .unwrap();
  assert!(pending.is_empty());
}

#[test]
fn staged_config_applies_at_round_boundary() {
  let (mut app, contract_addr) = setup(default_config());

  let mut new_config = default_config();
  new_config.price = Uint128::from(200u128);

  let err = app
    .execute_contract(
      Addr::unchecked(ALICE),
      contract_addr.clone(),
      &ExecuteMsg::SetConfig {
        config: new_config.clone(),
      },
      &[],
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "NotAuthorized");

  app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr.clone(),
      &ExecuteMsg::SetConfig {
        config: new_config.clone(),
      },
      &[],
    )
    .unwrap();

  // The open round still sells at the old price.
  let config: Config = app
    .wrap()
    .query_wasm_smart(contract_addr.clone(), &QueryMsg::Config {})
    .unwrap();
  assert_eq!(config.price, Uint128::from(PRICE));

  advance_past_round_end(&mut app);
  app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr.clone(),
      &ExecuteMsg::PostResults {
        numbers: Some(vec![pick("CA", 1), pick("MX", 2), pick("FR", 3)]),
      },
      &[],
    )
    .unwrap();

  let config: Config = app
    .wrap()
    .query_wasm_smart(contract_addr, &QueryMsg::Config {})
    .unwrap();
  assert_eq!(config.price, Uint128::from(200u128));
}

#[test]
fn invalid_config_is_rejected() {
  let mut config = default_config();
  config.prize_tiers = vec![];

  let mut app = AppBuilder::new().build(|router, _api, storage| {
    router
      .bank
      .init_balance(
        storage,
        &Addr::unchecked(ADMIN),
        coins(INITIAL_BALANCE, DENOM),
      )
      .unwrap();
  });
  let code_id = app.store_code(lotto_contract());
  let err = app
    .instantiate_contract(
      code_id,
      Addr::unchecked(ADMIN),
      &InstantiateMsg {
        owner: None,
        config,
      },
      &[],
      "world-lotto",
      None,
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "EmptyPrizeTable");
}

#[test]
fn withdraw_is_owner_only_and_bounded() {
  let (mut app, contract_addr) = setup(default_config());

  let err = app
    .execute_contract(
      Addr::unchecked(ALICE),
      contract_addr.clone(),
      &ExecuteMsg::Withdraw {
        amount: Uint128::from(1u128),
      },
      &[],
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "NotAuthorized");

  let err = app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr.clone(),
      &ExecuteMsg::Withdraw {
        amount: Uint128::from(PRIZE_FLOAT + 1),
      },
      &[],
    )
    .unwrap_err();
  assert_eq!(err.root_cause().to_string(), "InsufficientFunds");

  let before = balance_of(&app, ADMIN);
  app
    .execute_contract(
      Addr::unchecked(ADMIN),
      contract_addr,
      &ExecuteMsg::Withdraw {
        amount: Uint128::from(1_000u128),
      },
      &[],
    )
    .unwrap();
  assert_eq!(balance_of(&app, ADMIN), before + 1_000);
}
