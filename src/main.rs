use anyhow::Context;
use blog_content_client::app::dto::{
    GetPostRequest, GetPostsByCategoryRequest, GetPostsByTagRequest, GetPostsRequest,
    GetProjectRequest, GetProjectsRequest, IncrementViewRequest, PaginatedList, SearchPostsRequest,
};
use blog_content_client::config::cli::PageArgs;
use blog_content_client::domain::model::{ApiResponse, PostListItem};
use blog_content_client::utils::{logger, validation::Validate};
use blog_content_client::{BlogError, BlogServices, CliConfig, ClientConfig, Command, OutputFormat};
use clap::Parser;
use serde::Serialize;

const EXIT_API_ERROR: i32 = 1;
const EXIT_VALIDATION: i32 = 2;
const EXIT_CONFIG: i32 = 3;
const EXIT_NOT_FOUND: i32 = 4;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file = match cli.load_file_config() {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // 初始化日誌
    let verbose = cli.verbose_enabled(file.as_ref());
    if cli.json_logs_enabled(file.as_ref()) {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    let config = match cli
        .validate()
        .and_then(|_| ClientConfig::from_env())
        .and_then(|env| cli.resolve_client_config(env, file.as_ref()))
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let services = match BlogServices::from_shared(&config).await {
        Ok(services) => services,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(e) = run(&services, &cli.command, cli.output).await {
        let exit_code = match e.downcast_ref::<BlogError>() {
            Some(err) if err.is_not_found() => {
                eprintln!("Not found: {}", err);
                EXIT_NOT_FOUND
            }
            Some(BlogError::ValidationError { message }) => {
                eprintln!("❌ {}", message);
                EXIT_VALIDATION
            }
            Some(err) if err.is_config_error() => {
                eprintln!("❌ {}", err);
                EXIT_CONFIG
            }
            _ => {
                tracing::error!("❌ Request failed: {:#}", e);
                eprintln!("❌ {:#}", e);
                EXIT_API_ERROR
            }
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(services: &BlogServices, command: &Command, output: OutputFormat) -> anyhow::Result<()> {
    match command {
        Command::Posts { page, category_id, tag_id } => {
            let response = services
                .get_posts
                .execute(GetPostsRequest {
                    pagination: page.pagination(),
                    category_id: *category_id,
                    tag_id: *tag_id,
                })
                .await?;
            print_post_list(response, page, output)
        }
        Command::Post { slug } => {
            let response = services
                .get_post
                .execute(GetPostRequest { slug: slug.clone() })
                .await?;
            match output {
                OutputFormat::Json => print_json(&response),
                OutputFormat::Text => {
                    let post = &response.data;
                    print_post_line(post);
                    let tags: Vec<&str> = post.tags.iter().map(|t| t.name.as_str()).collect();
                    if !tags.is_empty() {
                        println!("  tags: {}", tags.join(", "));
                    }
                    println!("  {} min read", post.reading_time);
                    println!();
                    println!("{}", post.content);
                    if let Some(prev) = &post.prev_post {
                        println!();
                        println!("← {} ({})", prev.title, prev.slug);
                    }
                    if let Some(next) = &post.next_post {
                        println!("→ {} ({})", next.title, next.slug);
                    }
                    Ok(())
                }
            }
        }
        Command::Search { query, page } => {
            let response = services
                .search_posts
                .execute(SearchPostsRequest {
                    query: query.clone(),
                    pagination: page.pagination(),
                })
                .await?;
            print_post_list(response, page, output)
        }
        Command::View { slug } => {
            let response = services
                .increment_view
                .execute(IncrementViewRequest { slug: slug.clone() })
                .await?;
            match output {
                OutputFormat::Json => print_json(&response),
                OutputFormat::Text => {
                    println!("{}: {} views", slug, response.view_count);
                    Ok(())
                }
            }
        }
        Command::CategoryPosts { slug, page } => {
            let response = services
                .get_posts_by_category
                .execute(GetPostsByCategoryRequest {
                    category_slug: slug.clone(),
                    pagination: page.pagination(),
                })
                .await?;
            print_post_list(response, page, output)
        }
        Command::TagPosts { slug, page } => {
            let response = services
                .get_posts_by_tag
                .execute(GetPostsByTagRequest {
                    tag_slug: slug.clone(),
                    pagination: page.pagination(),
                })
                .await?;
            print_post_list(response, page, output)
        }
        Command::Projects { featured } => {
            let response = services
                .get_projects
                .execute(GetProjectsRequest { featured: *featured })
                .await?;
            match output {
                OutputFormat::Json => print_json(&response),
                OutputFormat::Text => {
                    for project in &response.data {
                        let marker = if project.is_featured { "★" } else { " " };
                        println!(
                            "{} {} ({})  {}",
                            marker,
                            project.title,
                            project.slug,
                            project.tech_stack.join(", ")
                        );
                    }
                    Ok(())
                }
            }
        }
        Command::Project { slug } => {
            let response = services
                .get_project
                .execute(GetProjectRequest { slug: slug.clone() })
                .await?;
            match output {
                OutputFormat::Json => print_json(&response),
                OutputFormat::Text => {
                    let project = &response.data;
                    println!("{} ({})", project.title, project.slug);
                    println!("  {}", project.description);
                    if let Some(url) = &project.github_url {
                        println!("  source: {}", url);
                    }
                    if let Some(url) = &project.demo_url {
                        println!("  demo:   {}", url);
                    }
                    println!();
                    println!("{}", project.content);
                    Ok(())
                }
            }
        }
        Command::Categories => {
            let response = services.get_categories.execute().await?;
            match output {
                OutputFormat::Json => print_json(&response),
                OutputFormat::Text => {
                    for category in &response.data {
                        println!("{} ({})  {} posts", category.name, category.slug, category.post_count);
                    }
                    Ok(())
                }
            }
        }
        Command::Tags => {
            let response = services.get_tags.execute().await?;
            match output {
                OutputFormat::Json => print_json(&response),
                OutputFormat::Text => {
                    for tag in &response.data {
                        println!("#{} ({})  {} posts", tag.name, tag.slug, tag.post_count);
                    }
                    Ok(())
                }
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to render response as JSON")?;
    println!("{}", json);
    Ok(())
}

fn print_post_line(post: &PostListItem) {
    let date = post
        .display_date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "----------".to_string());
    println!(
        "{}  {} ({})  [{}]  {} views",
        date, post.title, post.slug, post.category_name, post.view_count
    );
}

fn print_post_list(
    response: ApiResponse<Vec<PostListItem>>,
    page: &PageArgs,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let list = PaginatedList::from_response(response, page.pagination().normalize());

    match output {
        OutputFormat::Json => print_json(&list),
        OutputFormat::Text => {
            for post in &list.data {
                print_post_line(post);
            }
            println!(
                "page {}/{} ({} posts{})",
                list.pagination.page,
                list.pagination.total_pages,
                list.pagination.total,
                if list.has_next_page() { ", more available" } else { "" }
            );
            Ok(())
        }
    }
}
