use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing::{debug, warn};
use vampirc_uci::uci::UciSearchControl;
use vampirc_uci::{parser, UciMessage};

use crate::core::board::{Board, Color};
use crate::engine::controller::{perft, GameController};
use crate::engine::eval::evaluate;
use crate::engine::search::SearchConfig;

const MAX_DEPTH: u32 = 8;
const MAX_THREADS: usize = 64;

pub struct UCI {
    controller: GameController,
    side_to_move: Color,
}

impl UCI {
    pub fn new() -> Self {
        UCI {
            controller: GameController::new(),
            side_to_move: Color::White,
        }
    }

    pub fn board(&self) -> &Board {
        self.controller.board()
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn config(&self) -> SearchConfig {
        self.controller.config()
    }

    /// Read commands from stdin until `quit` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;
            let keep_going = self.handle_line(&line, &mut stdout)?;
            stdout.flush()?;
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    /// Handle one command line, writing replies to `out`.
    /// Returns `false` once `quit` is received.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }

        match parser::parse_one(line) {
            UciMessage::Uci => self.cmd_uci(out)?,
            UciMessage::IsReady => writeln!(out, "readyok")?,
            UciMessage::SetOption { name, value } => {
                self.apply_setoption(name.trim(), value.as_deref());
            }
            UciMessage::UciNewGame => self.cmd_ucinewgame(),
            UciMessage::Position { startpos, fen, moves } => {
                let fen_str = fen.as_ref().map(|f| f.as_str());
                let move_strs: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                let refs: Vec<&str> = move_strs.iter().map(String::as_str).collect();
                self.apply_position(startpos, fen_str, &refs);
            }
            UciMessage::Go { search_control, .. } => {
                let depth = go_depth(search_control.as_ref());
                self.do_go(depth, out)?;
            }
            UciMessage::Quit => return Ok(false),
            UciMessage::Unknown(ref s, _) => {
                let parts: Vec<&str> = s.split_whitespace().collect();
                match parts.first().copied() {
                    Some("d") | Some("display") => self.cmd_display(out)?,
                    Some("eval") => self.cmd_eval(out)?,
                    Some("perft") => self.cmd_perft(&parts, out)?,
                    _ => debug!(line, "ignored command"),
                }
            }
            _ => debug!(line, "ignored command"),
        }
        Ok(true)
    }

    fn cmd_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let config = self.controller.config();
        writeln!(out, "id name bitboard_chess {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author bitboard_chess developers")?;
        writeln!(out)?;
        writeln!(
            out,
            "option name Depth type spin default {} min 0 max {}",
            config.depth, MAX_DEPTH
        )?;
        writeln!(
            out,
            "option name Threads type spin default {} min 1 max {}",
            config.threads, MAX_THREADS
        )?;
        writeln!(out, "uciok")
    }

    fn apply_setoption(&mut self, name: &str, value: Option<&str>) {
        let opt = name.to_lowercase().replace([' ', '_'], "");
        let value = value.unwrap_or("").trim();
        let mut config = self.controller.config();

        match opt.as_str() {
            "depth" => {
                let Ok(depth) = value.parse::<u32>() else {
                    warn!(value, "bad Depth value");
                    return;
                };
                config.depth = depth.min(MAX_DEPTH);
            }
            "threads" => {
                let Ok(threads) = value.parse::<usize>() else {
                    warn!(value, "bad Threads value");
                    return;
                };
                config.threads = threads.clamp(1, MAX_THREADS);
            }
            _ => {
                debug!(name, "unknown option");
                return;
            }
        }
        self.controller.set_config(config);
    }

    fn cmd_ucinewgame(&mut self) {
        self.controller.reset();
        self.side_to_move = Color::White;
    }

    fn apply_position(&mut self, startpos: bool, fen: Option<&str>, move_strs: &[&str]) {
        if startpos {
            self.controller.reset();
            self.side_to_move = Color::White;
        } else if let Some(fen_str) = fen {
            match Board::from_fen(fen_str) {
                Ok((board, side)) => {
                    self.controller.set_board(board);
                    self.side_to_move = side;
                }
                Err(e) => {
                    warn!(error = %e, "position rejected");
                    return;
                }
            }
        }

        for &s in move_strs {
            if let Err(e) = self.controller.play_uci(self.side_to_move, s) {
                warn!(error = %e, "stopping at illegal move");
                break;
            }
            self.side_to_move = self.side_to_move.opposite();
        }
    }

    /// Search the current position and report `bestmove`
    fn do_go<W: Write>(&mut self, depth: Option<u32>, out: &mut W) -> io::Result<()> {
        let saved = self.controller.config();
        if let Some(depth) = depth {
            self.controller.set_config(SearchConfig {
                depth: depth.min(MAX_DEPTH),
                ..saved
            });
        }

        let color = self.side_to_move;
        let searched_depth = self.controller.config().depth;
        let best = self.controller.best_move(color);

        if let Some(scored) = best {
            let stats = self.controller.search_stats();
            writeln!(
                out,
                "info depth {} score cp {} nodes {} time {} pv {}",
                searched_depth,
                centipawns(scored.score, color),
                stats.nodes,
                stats.elapsed_ms,
                scored.mv
            )?;
            writeln!(out, "bestmove {}", scored.mv)?;
        } else {
            writeln!(out, "bestmove 0000")?;
        }

        self.controller.set_config(saved);
        Ok(())
    }

    fn cmd_display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{}", self.controller.board())?;
        writeln!(out, "Fen: {}", self.controller.board().to_fen(self.side_to_move))
    }

    fn cmd_eval<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let score = evaluate(self.controller.board());
        writeln!(out, "Evaluation: {}", score)?;
        writeln!(out, "(Positive = Black advantage)")
    }

    fn cmd_perft<W: Write>(&self, parts: &[&str], out: &mut W) -> io::Result<()> {
        let depth: u32 = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(1);
        let start = Instant::now();
        let nodes = perft(self.controller.board(), self.side_to_move, depth);
        let elapsed = start.elapsed();
        let nps = if elapsed.as_millis() > 0 {
            nodes as u128 * 1000 / elapsed.as_millis()
        } else {
            0
        };
        writeln!(out, "Nodes: {} ({} ms, {} nps)", nodes, elapsed.as_millis(), nps)
    }
}

fn go_depth(search_control: Option<&UciSearchControl>) -> Option<u32> {
    search_control.and_then(|sc| sc.depth).map(u32::from)
}

/// Material score (Black positive, pawn = 1) as centipawns for the side to move
fn centipawns(score: i32, side: Color) -> i32 {
    let cp = score * 100;
    match side {
        Color::Black => cp,
        Color::White => -cp,
    }
}

impl Default for UCI {
    fn default() -> Self {
        Self::new()
    }
}
