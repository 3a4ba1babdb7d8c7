//! Integration tests driving the referee protocol end to end through
//! `Protocol::handle_line`, the same entry point the stdin loop uses.

use flint_othello::board::Board;
use flint_othello::protocol::{Protocol, ProtocolError, Reply, PASS_REPLY};
use flint_othello::types::{decode_move, Side};

fn reply_line(reply: Reply) -> String {
    match reply {
        Reply::Line(line) => line,
        other => panic!("expected a reply line, got {other:?}"),
    }
}

#[test]
fn engine_answers_the_opening_with_a_legal_move() {
    let mut protocol = Protocol::new();
    assert_eq!(protocol.handle_line("START B 1"), Ok(Reply::None));

    let board = Board::opening();
    let reply = protocol
        .handle_line(&format!("MOVE {}", board.to_wire()))
        .unwrap();
    let mv = decode_move(&reply_line(reply)).expect("reply is in move notation");
    assert!(board.is_legal_move(mv, Side::Dark));

    // The session tracks the position after the engine's own reply.
    assert_eq!(
        protocol.current_board(),
        Some(&board.apply_move(mv, Side::Dark))
    );
}

#[test]
fn engine_plays_a_few_exchanges_as_dark() {
    let mut protocol = Protocol::new();
    protocol.handle_line("START B 1").unwrap();

    let mut board = Board::opening();
    for _ in 0..3 {
        // Referee asks for the engine's (Dark) move.
        let reply = protocol
            .handle_line(&format!("MOVE {}", board.to_wire()))
            .unwrap();
        let mv = decode_move(&reply_line(reply)).expect("engine move decodes");
        assert!(board.is_legal_move(mv, Side::Dark));
        board = board.apply_move(mv, Side::Dark);

        // Referee answers with Light's first available move.
        let light_moves = board.legal_moves(Side::Light);
        let Some(&light_mv) = light_moves.first() else {
            break;
        };
        board = board.apply_move(light_mv, Side::Light);
    }
}

#[test]
fn engine_passes_when_it_has_no_legal_move() {
    let mut protocol = Protocol::new();
    protocol.handle_line("START B 1").unwrap();

    // Only light discs on the board: Dark cannot flank anything.
    let wire = Board::opening().to_wire().replace('1', "2");
    let reply = protocol.handle_line(&format!("MOVE {wire}")).unwrap();
    assert_eq!(reply, Reply::Line(PASS_REPLY.to_string()));
}

#[test]
fn engine_can_play_light() {
    let mut protocol = Protocol::new();
    protocol.handle_line("START W 1").unwrap();

    // Dark opened with D3; the engine answers as Light.
    let board = Board::opening();
    let dark_moves = board.legal_moves(Side::Dark);
    let board = board.apply_move(dark_moves[0], Side::Dark);

    let reply = protocol
        .handle_line(&format!("MOVE {}", board.to_wire()))
        .unwrap();
    let mv = decode_move(&reply_line(reply)).expect("reply is in move notation");
    assert!(board.is_legal_move(mv, Side::Light));
}

#[test]
fn restarting_an_active_session_is_fatal() {
    let mut protocol = Protocol::new();
    protocol.handle_line("START B 5").unwrap();
    assert_eq!(
        protocol.handle_line("START W 3"),
        Err(ProtocolError::SessionActive)
    );
}

#[test]
fn truncated_move_payload_is_fatal() {
    let mut protocol = Protocol::new();
    protocol.handle_line("START B 5").unwrap();

    let wire = Board::opening().to_wire();
    let result = protocol.handle_line(&format!("MOVE {}", &wire[..63]));
    assert!(matches!(result, Err(ProtocolError::InvalidMove(_))));
}

#[test]
fn unsupported_command_is_fatal() {
    let mut protocol = Protocol::new();
    protocol.handle_line("START B 5").unwrap();
    assert!(matches!(
        protocol.handle_line("SOS"),
        Err(ProtocolError::Unsupported(_))
    ));
}
