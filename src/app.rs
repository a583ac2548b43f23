use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use crate::components::post_details;
use crate::components::post_list::{self, DelegateEvent, SystemAction, UserAction};
use crate::environment::{Environment, Repository};

/// Owns the list screen and opens a detail screen whenever the list asks
/// for one. At most one detail screen is alive at a time.
pub struct App {
    environment: Environment,
    list: post_list::ViewStore,
    details: Option<post_details::ViewStore>,
}

impl App {
    /// Must be called from within a Tokio runtime.
    pub fn new(environment: Environment) -> Self {
        let state = post_list::State::new(environment.config.page_limit);
        let list = post_list::ViewStore::new(state, environment.clone());
        Self {
            environment,
            list,
            details: None,
        }
    }

    pub fn start(&self) {
        self.list
            .send(post_list::Action::System(SystemAction::ViewDidLoad));
    }

    pub fn list(&self) -> &post_list::ViewStore {
        &self.list
    }

    pub fn details(&self) -> Option<&post_details::ViewStore> {
        self.details.as_ref()
    }

    pub fn handle(&mut self, event: DelegateEvent) {
        match event {
            DelegateEvent::OpenPostDetails(post) => {
                log::info!("opening post {}", post.id);
                let store = post_details::ViewStore::new(
                    post_details::State::new(post),
                    self.environment.clone(),
                );
                store.send(post_details::Action::System(
                    post_details::SystemAction::ViewDidLoad,
                ));
                self.details = Some(store);
            }
        }
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }
}

pub async fn run() -> Result<(), String> {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();

    let repository = Repository::new()?;
    let config = repository.config()?;
    log::info!(
        "loading {} ({} per page), settings in {}",
        config.base_url,
        config.page_limit,
        repository.directory().display()
    );

    let mut app = App::new(Environment::from_config(config));
    let navigation = app.list().delegate();
    let mut list_updates = app.list().subscribe();
    let mut detail_updates: Option<watch::Receiver<post_details::State>> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_help();
    app.start();

    loop {
        let input = tokio::select! {
            line = lines.next_line() => match line.map_err(|e| format!("stdin: {e}"))? {
                Some(line) => Input::Command(line),
                None => break,
            },
            changed = list_updates.changed() => match changed {
                Ok(()) => Input::ListChanged,
                Err(_) => break,
            },
            Ok(event) = navigation.recv_async() => Input::Navigate(event),
            Some(state) = detail_changed(detail_updates.as_mut()) => Input::DetailsChanged(state),
        };

        match input {
            Input::ListChanged => {
                if app.details().is_none() {
                    print_list(&list_updates.borrow_and_update());
                }
            }
            Input::DetailsChanged(state) => print_details(&state),
            Input::Navigate(event) => {
                app.handle(event);
                detail_updates = app.details().map(|store| store.subscribe());
                if let Some(store) = app.details() {
                    print_details(&store.state());
                }
            }
            Input::Command(line) => {
                let list = app.list().state();
                let mut words = line.split_whitespace();
                match (words.next(), words.next()) {
                    (Some("more"), _) => match list.posts.len().checked_sub(1) {
                        Some(last) => app
                            .list()
                            .send(post_list::Action::System(SystemAction::DidScroll(last))),
                        None => println!("nothing to scroll"),
                    },
                    (Some("refresh"), _) => {
                        app.list().send(post_list::Action::User(UserAction::Refresh))
                    }
                    (Some("open"), Some(index)) => {
                        match index.parse::<usize>().ok().and_then(|i| list.posts.get(i)) {
                            Some(post) => app.list().send(post_list::Action::User(
                                UserAction::DidSelectPost(post.clone()),
                            )),
                            None => println!("no post at {index}"),
                        }
                    }
                    (Some("back"), _) => {
                        app.close_details();
                        detail_updates = None;
                        print_list(&list);
                    }
                    (Some("quit"), _) => break,
                    _ => print_help(),
                }
            }
        }
    }
    Ok(())
}

enum Input {
    Command(String),
    ListChanged,
    Navigate(DelegateEvent),
    DetailsChanged(post_details::State),
}

async fn detail_changed(
    receiver: Option<&mut watch::Receiver<post_details::State>>,
) -> Option<post_details::State> {
    let Some(receiver) = receiver else {
        return std::future::pending().await;
    };
    receiver.changed().await.ok()?;
    let state = receiver.borrow_and_update().clone();
    Some(state)
}

fn print_help() {
    println!("commands: more | refresh | open <n> | back | quit");
}

fn print_list(state: &post_list::State) {
    println!("== Posts (page {}) ==", state.current_page);
    for (index, post) in state.posts.iter().enumerate() {
        println!("{index:>3}  {}", post.title);
    }
    if let Some(message) = state.fetching_state.error_message() {
        println!("error: {message}");
    } else if state.fetching_state.is_fetching() {
        println!("loading...");
    } else if state.is_fetching_next {
        println!("loading more...");
    }
}

fn print_details(state: &post_details::State) {
    println!("== {} ==", state.title());
    println!("{}\n\n{}\n", state.post.title, state.post.body);
    match state.fetching_state.error_message() {
        Some(message) => println!("error: {message}"),
        None if state.fetching_state.is_fetching() => println!("loading comments..."),
        None => {
            for comment in &state.comments {
                println!("- {} <{}>\n  {}", comment.name, comment.email, comment.body);
            }
        }
    }
}
