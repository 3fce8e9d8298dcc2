use std::io::{BufRead, Write};

use anyhow::Context;
use blogthread_client::{
    api::{self, CommentId, CsrfToken, EditComment, NewComment, PostId},
    HttpTransport, Prompt, Transport, DELETE_CONFIRMATION,
};

#[derive(structopt::StructOpt)]
struct Opt {
    /// Base URL of the blog, eg. https://blog.example.org
    #[structopt(short, long)]
    host: String,

    /// Post whose comment thread is targeted
    #[structopt(short, long)]
    post: u64,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Post a comment, or a reply to another comment
    Comment {
        text: String,

        /// Comment to reply to
        #[structopt(long)]
        parent: Option<u64>,
    },

    /// Replace the content of one of your comments
    Edit { id: u64, text: String },

    /// Delete one of your comments along with its replies
    Delete {
        id: u64,

        /// Do not ask for confirmation
        #[structopt(short, long)]
        yes: bool,
    },

    /// Like the post, or unlike it if already liked
    Like,
}

struct Terminal {
    assume_yes: bool,
}

impl Prompt for Terminal {
    fn alert(&self, msg: &str) {
        eprintln!("{msg}");
    }

    fn confirm(&self, msg: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{msg} [y/N] ");
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(_) => false,
        }
    }
}

fn csrf_token() -> anyhow::Result<CsrfToken> {
    let tok = std::env::var("BLOGTHREAD_CSRF")
        .context("retrieving BLOGTHREAD_CSRF environment variable")?;
    Ok(CsrfToken(tok))
}

fn print_comment(c: &api::Comment) {
    println!("#{} {} {}: {}", c.id.0, c.created_at, c.author, c.content);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let opt = <Opt as structopt::StructOpt>::from_args();
    let post = PostId(opt.post);

    let mut transport = HttpTransport::new(reqwest::Client::new(), opt.host, csrf_token()?);
    if let Ok(cookie) = std::env::var("BLOGTHREAD_SESSION") {
        transport = transport.with_session_cookie(cookie);
    }

    match opt.cmd {
        Command::Comment { text, parent } => {
            let req = NewComment {
                content: api::validate_content(&text)?,
                parent_id: parent.map(CommentId),
            };
            let c = transport
                .create_comment(post, &req)
                .await
                .context("posting comment")??;
            print_comment(&c);
        }
        Command::Edit { id, text } => {
            let req = EditComment {
                content: api::validate_content(&text)?,
            };
            let edited = transport
                .edit_comment(CommentId(id), &req)
                .await
                .context("editing comment")??;
            println!("#{id}: {}", edited.content);
        }
        Command::Delete { id, yes } => {
            if !(Terminal { assume_yes: yes }).confirm(DELETE_CONFIRMATION) {
                tracing::info!(id, "deletion cancelled");
                return Ok(());
            }
            transport
                .delete_comment(CommentId(id))
                .await
                .context("deleting comment")??;
            println!("#{id} deleted");
        }
        Command::Like => {
            let like = transport
                .toggle_like(post)
                .await
                .context("toggling like")??;
            let state = match like.liked {
                true => "liked",
                false => "not liked",
            };
            println!("{state} ({} likes)", like.like_count);
        }
    }

    Ok(())
}
