//! Board feature helpers shared by the evaluator and move ordering

use crate::board::{Board, Disc, Pos, BOARD_SIZE};
use crate::game::GameState;
use crate::rules::valid_moves;

const N: u8 = (BOARD_SIZE - 1) as u8;

/// The four corner cells
pub const CORNERS: [Pos; 4] = [
    Pos { row: 0, col: 0 },
    Pos { row: 0, col: N },
    Pos { row: N, col: 0 },
    Pos { row: N, col: N },
];

/// Classic positional weight table: corners dominate, the X- and
/// C-squares next to them are liabilities, edges are mildly good.
pub const POSITIONAL_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

#[inline]
pub fn is_corner(pos: Pos) -> bool {
    (pos.row == 0 || pos.row == N) && (pos.col == 0 || pos.col == N)
}

#[inline]
pub fn is_edge(pos: Pos) -> bool {
    pos.row == 0 || pos.row == N || pos.col == 0 || pos.col == N
}

/// X-squares: diagonal neighbors of the corners, (1,1)/(1,6)/(6,1)/(6,6)
#[inline]
pub fn is_x_square(pos: Pos) -> bool {
    (pos.row == 1 || pos.row == N - 1) && (pos.col == 1 || pos.col == N - 1)
}

/// C-squares: edge cells orthogonally adjacent to a corner
#[inline]
pub fn is_c_square(pos: Pos) -> bool {
    matches!(
        (pos.row, pos.col),
        (0, 1) | (1, 0) | (0, 6) | (1, 7) | (6, 0) | (7, 1) | (6, 7) | (7, 6)
    )
}

/// Number of corners held by `disc`
pub fn corner_count(board: &Board, disc: Disc) -> i32 {
    CORNERS.iter().filter(|&&pos| board.get(pos) == disc).count() as i32
}

/// Positional weight table applied to occupancy, `me` minus opponent
pub fn positional_score(board: &Board, me: Disc) -> i32 {
    let opp = me.opponent();
    let mut score = 0;
    for pos in Board::positions() {
        let cell = board.get(pos);
        if cell == me {
            score += POSITIONAL_WEIGHTS[pos.row as usize][pos.col as usize];
        } else if cell == opp {
            score -= POSITIONAL_WEIGHTS[pos.row as usize][pos.col as usize];
        }
    }
    score
}

/// Frontier disc balance, `me` minus opponent.
///
/// A frontier disc touches at least one empty cell and is the most
/// exposed to future capture, so a positive balance is bad for `me`;
/// the evaluator applies a negative weight.
pub fn frontier_score(board: &Board, me: Disc) -> i32 {
    const DIRS: [(i32, i32); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    let opp = me.opponent();
    let mut me_front = 0;
    let mut opp_front = 0;

    for pos in Board::positions() {
        let disc = board.get(pos);
        if disc == Disc::Empty {
            continue;
        }

        let near_empty = DIRS.iter().any(|&(dr, dc)| {
            let r = i32::from(pos.row) + dr;
            let c = i32::from(pos.col) + dc;
            Pos::is_valid(r, c) && board.is_empty(Pos::new(r as u8, c as u8))
        });

        if near_empty {
            if disc == me {
                me_front += 1;
            } else if disc == opp {
                opp_front += 1;
            }
        }
    }

    me_front - opp_front
}

/// Stable-edge approximation: corner-anchored same-color runs along both
/// edges of each corner. Runs rooted at a corner owned by `me` count
/// positively, opponent-rooted runs negatively; empty corners contribute
/// nothing. The corner cell itself is part of both of its runs.
pub fn stable_edge_score(board: &Board, me: Disc) -> i32 {
    // (corner, direction along one of its edges)
    const RUNS: [(Pos, (i32, i32)); 8] = [
        (Pos { row: 0, col: 0 }, (0, 1)),
        (Pos { row: 0, col: 0 }, (1, 0)),
        (Pos { row: 0, col: N }, (0, -1)),
        (Pos { row: 0, col: N }, (1, 0)),
        (Pos { row: N, col: 0 }, (0, 1)),
        (Pos { row: N, col: 0 }, (-1, 0)),
        (Pos { row: N, col: N }, (0, -1)),
        (Pos { row: N, col: N }, (-1, 0)),
    ];

    let mut score = 0;
    for &(corner, (dr, dc)) in &RUNS {
        let anchor = board.get(corner);
        if anchor == Disc::Empty {
            continue;
        }

        let mut run = 0;
        let mut r = i32::from(corner.row);
        let mut c = i32::from(corner.col);
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == anchor {
            run += 1;
            r += dr;
            c += dc;
        }

        score += if anchor == me { run } else { -run };
    }
    score
}

/// Corner cells `disc` could legally capture into right now
pub fn corner_moves(board: &Board, disc: Disc) -> i32 {
    valid_moves(board, disc)
        .into_iter()
        .filter(|&pos| is_corner(pos))
        .count() as i32
}

/// Edge cells (corners included) `disc` could legally capture into right now
pub fn edge_moves(board: &Board, disc: Disc) -> i32 {
    valid_moves(board, disc)
        .into_iter()
        .filter(|&pos| is_edge(pos))
        .count() as i32
}

/// Delayed corner threat: how many of the opponent's replies keep a
/// corner capture open for the opponent one ply later.
///
/// Returns a flat 3 when the opponent already has an immediate corner
/// move. The one-ply lookahead deliberately does not re-check whose turn
/// it would actually be after a pass chain; it is a tuning signal, not a
/// correctness contract.
pub fn delayed_corner_threat(state: &GameState, me: Disc) -> i32 {
    let opp = me.opponent();

    if corner_moves(state.board(), opp) > 0 {
        return 3;
    }

    let opp_moves = valid_moves(state.board(), opp);
    if opp_moves.is_empty() {
        return 0;
    }

    let mut threats = 0;
    for mov in opp_moves {
        let mut next = state.clone();
        if next.apply_move(mov).is_err() {
            continue;
        }
        if corner_moves(next.board(), opp) > 0 {
            threats += 1;
        }
    }
    threats
}
