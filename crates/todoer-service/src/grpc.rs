use crate::pb::todoer::v1::todoer_server::{Todoer, TodoerServer};
use crate::pb::todoer::v1::{
    CreateTodoListReply, CreateTodoListRequest, CreateTodoReply, CreateTodoRequest,
    DeleteTodoListRequest, DeleteTodoRequest, Empty, GetAllTodoListsReply, GetTodoListReply,
    GetTodoListRequest, GetTodoReply, GetTodoRequest, GetTodosByListReply, GetTodosByListRequest,
    Todo as TodoMessage, TodoList as TodoListMessage, UpdateTodoListRequest, UpdateTodoRequest,
};
use crate::{format_due_date, parse_due_date, ApiError, ServiceState};
use todoer_core::{StoreError, Todo, TodoList, TodoStore};
use tonic::transport::Server;
use tonic::{Request, Response, Status};

#[derive(Clone)]
pub struct GrpcApi {
    state: ServiceState,
}

impl GrpcApi {
    pub fn new(state: ServiceState) -> Self {
        Self { state }
    }
}

#[tonic::async_trait]
impl Todoer for GrpcApi {
    async fn create_todo_list(
        &self,
        request: Request<CreateTodoListRequest>,
    ) -> Result<Response<CreateTodoListReply>, Status> {
        let req = request.into_inner();
        let list = self
            .state
            .store
            .lock()
            .await
            .insert_list(TodoList::new(req.title))
            .map_err(store_error_to_status)?;
        Ok(Response::new(CreateTodoListReply {
            todo_list: Some(from_core_todo_list(list)),
        }))
    }

    async fn get_all_todo_lists(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<GetAllTodoListsReply>, Status> {
        let lists = self.state.store.lock().await.all_lists();
        Ok(Response::new(GetAllTodoListsReply {
            todo_lists: lists.into_iter().map(from_core_todo_list).collect(),
        }))
    }

    async fn get_todo_list(
        &self,
        request: Request<GetTodoListRequest>,
    ) -> Result<Response<GetTodoListReply>, Status> {
        let req = request.into_inner();
        let list = self
            .state
            .store
            .lock()
            .await
            .list_by_id(req.id)
            .map_err(store_error_to_status)?;
        Ok(Response::new(GetTodoListReply {
            todo_list: Some(from_core_todo_list(list)),
        }))
    }

    async fn update_todo_list(
        &self,
        request: Request<UpdateTodoListRequest>,
    ) -> Result<Response<Empty>, Status> {
        let message = request
            .into_inner()
            .todo_list
            .ok_or_else(|| Status::invalid_argument("todo_list is required"))?;
        self.state
            .store
            .lock()
            .await
            .update_list(into_core_todo_list(message))
            .map_err(store_error_to_status)?;
        Ok(Response::new(Empty {}))
    }

    async fn delete_todo_list(
        &self,
        request: Request<DeleteTodoListRequest>,
    ) -> Result<Response<Empty>, Status> {
        let req = request.into_inner();
        self.state
            .store
            .lock()
            .await
            .delete_list_by_id(req.id)
            .map_err(store_error_to_status)?;
        Ok(Response::new(Empty {}))
    }

    async fn create_todo(
        &self,
        request: Request<CreateTodoRequest>,
    ) -> Result<Response<CreateTodoReply>, Status> {
        let req = request.into_inner();
        let todo = Todo::new(req.list_id, req.description)
            .with_comments(req.comments)
            .with_labels(req.labels)
            .with_done(req.done);
        let todo = match parse_due_date(&req.due_date).map_err(api_error_to_status)? {
            Some(due_date) => todo.with_due_date(due_date),
            None => todo,
        };

        let todo = self
            .state
            .store
            .lock()
            .await
            .insert_todo(todo)
            .map_err(store_error_to_status)?;
        Ok(Response::new(CreateTodoReply {
            todo: Some(from_core_todo(todo)),
        }))
    }

    async fn get_todo(
        &self,
        request: Request<GetTodoRequest>,
    ) -> Result<Response<GetTodoReply>, Status> {
        let req = request.into_inner();
        let todo = self
            .state
            .store
            .lock()
            .await
            .todo_by_id(req.id)
            .map_err(store_error_to_status)?;
        Ok(Response::new(GetTodoReply {
            todo: Some(from_core_todo(todo)),
        }))
    }

    async fn get_todos_by_list(
        &self,
        request: Request<GetTodosByListRequest>,
    ) -> Result<Response<GetTodosByListReply>, Status> {
        let req = request.into_inner();
        let todos = self
            .state
            .store
            .lock()
            .await
            .todos_by_list_id(req.list_id)
            .map_err(store_error_to_status)?;
        Ok(Response::new(GetTodosByListReply {
            todos: todos.into_iter().map(from_core_todo).collect(),
        }))
    }

    async fn update_todo(
        &self,
        request: Request<UpdateTodoRequest>,
    ) -> Result<Response<Empty>, Status> {
        let message = request
            .into_inner()
            .todo
            .ok_or_else(|| Status::invalid_argument("todo is required"))?;
        let todo = into_core_todo(message).map_err(api_error_to_status)?;
        self.state
            .store
            .lock()
            .await
            .update_todo(todo)
            .map_err(store_error_to_status)?;
        Ok(Response::new(Empty {}))
    }

    async fn delete_todo(
        &self,
        request: Request<DeleteTodoRequest>,
    ) -> Result<Response<Empty>, Status> {
        let req = request.into_inner();
        let mut target = Todo::new(req.list_id, String::new());
        target.id = req.id;
        self.state
            .store
            .lock()
            .await
            .delete_todo(&target)
            .map_err(store_error_to_status)?;
        Ok(Response::new(Empty {}))
    }
}

/// Surfaces the engine error as a status whose code reflects the error kind;
/// the status message is the engine error's own text.
fn store_error_to_status(err: StoreError) -> Status {
    let message = err.to_string();
    match err {
        StoreError::EmptyTitle | StoreError::EmptyDescription => {
            Status::invalid_argument(message)
        }
        StoreError::ListNotFound | StoreError::TodoNotFound => Status::not_found(message),
    }
}

fn api_error_to_status(err: ApiError) -> Status {
    match err {
        ApiError::Store(err) => store_error_to_status(err),
        ApiError::InvalidDueDate => Status::invalid_argument(err.to_string()),
    }
}

fn from_core_todo_list(list: TodoList) -> TodoListMessage {
    TodoListMessage {
        id: list.id,
        title: list.title,
    }
}

fn into_core_todo_list(message: TodoListMessage) -> TodoList {
    TodoList {
        id: message.id,
        title: message.title,
    }
}

fn from_core_todo(todo: Todo) -> TodoMessage {
    TodoMessage {
        id: todo.id,
        list_id: todo.list_id,
        description: todo.description,
        comments: todo.comments,
        due_date: format_due_date(todo.due_date),
        labels: todo.labels,
        done: todo.done,
    }
}

fn into_core_todo(message: TodoMessage) -> Result<Todo, ApiError> {
    Ok(Todo {
        id: message.id,
        list_id: message.list_id,
        description: message.description,
        comments: message.comments,
        due_date: parse_due_date(&message.due_date)?,
        labels: message.labels,
        done: message.done,
    })
}

pub async fn serve_grpc(state: ServiceState, addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let service = TodoerServer::new(GrpcApi::new(state));

    Server::builder().add_service(service).serve(addr).await?;

    Ok(())
}
