//! HTML page for the board.

use shared_tictactoe::{Cell, Game, Player, rules};
use std::fmt::Write;
use tracing::instrument;

const STYLE: &str = include_str!("../assets/style.css");
const SCRIPT: &str = include_str!("../assets/client.js");

/// Renders the full page for the current game.
#[instrument(skip(game), fields(status = ?game.status()))]
pub fn render_page(game: &Game) -> Result<String, std::fmt::Error> {
    let snapshot = game.snapshot();
    let mut page = String::with_capacity(STYLE.len() + SCRIPT.len() + 2048);

    writeln!(page, "<!DOCTYPE html>")?;
    writeln!(page, "<html lang=\"en\">")?;
    writeln!(page, "<head>")?;
    writeln!(page, "<meta charset=\"UTF-8\">")?;
    writeln!(
        page,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(page, "<title>Tic-Tac-Toe</title>")?;
    writeln!(page, "<style>\n{}</style>", STYLE)?;
    writeln!(page, "</head>")?;
    writeln!(page, "<body>")?;
    writeln!(page, "<div class=\"game-container\">")?;
    writeln!(page, "<h1>Tic-Tac-Toe</h1>")?;
    writeln!(
        page,
        "<p>Player's Turn: <span id=\"currentPlayer\" class=\"{}\">{}</span></p>",
        player_class(snapshot.current_player),
        snapshot.current_player
    )?;

    writeln!(page, "<div class=\"board-and-scores\">")?;
    write_board(&mut page, game)?;
    writeln!(page, "<div class=\"score-container\">")?;
    writeln!(page, "<p>Score:</p>")?;
    writeln!(
        page,
        "<p id=\"scoreX\">Player <span class=\"player-x\">X</span>: <span id=\"scoreXValue\">{}</span></p>",
        snapshot.score_x
    )?;
    writeln!(
        page,
        "<p id=\"scoreO\">Player <span class=\"player-o\">O</span>: <span id=\"scoreOValue\">{}</span></p>",
        snapshot.score_o
    )?;
    writeln!(page, "</div>")?;
    writeln!(page, "</div>")?;

    writeln!(
        page,
        "<p id=\"resultMessage\">{}</p>",
        escape_html(&snapshot.message)
    )?;
    writeln!(
        page,
        "<button class=\"reset-btn\" onclick=\"resetGame()\">Restart</button>"
    )?;
    writeln!(page, "</div>")?;
    writeln!(page, "<script>\n{}</script>", SCRIPT)?;
    writeln!(page, "</body>")?;
    writeln!(page, "</html>")?;

    Ok(page)
}

fn write_board(page: &mut String, game: &Game) -> std::fmt::Result {
    let board = game.board();
    writeln!(page, "<table>")?;
    for (row, cells) in board.rows().iter().enumerate() {
        writeln!(page, "<tr>")?;
        for (col, cell) in cells.iter().enumerate() {
            let mut class = String::from("cell");
            if let Cell::Occupied(player) = cell {
                class.push_str(match player {
                    Player::X => " mark-x",
                    Player::O => " mark-o",
                });
                if rules::in_winning_line(board, row, col) {
                    class.push_str(match player {
                        Player::X => " winning-cell-x",
                        Player::O => " winning-cell-o",
                    });
                }
            }
            writeln!(
                page,
                "<td class=\"{}\" onclick=\"makeMove({}, {})\">{}</td>",
                class,
                row,
                col,
                escape_html(cell.symbol())
            )?;
        }
        writeln!(page, "</tr>")?;
    }
    writeln!(page, "</table>")
}

fn player_class(player: Player) -> &'static str {
    match player {
        Player::X => "player-x",
        Player::O => "player-o",
    }
}

/// Escapes text for use inside HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
