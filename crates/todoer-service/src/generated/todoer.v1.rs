// @generated
// Generated from: proto/todoer/v1/todoer.proto
// Manual check-in for offline builds.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Empty {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TodoList {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(string, tag = "2")]
    pub title: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Todo {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(uint32, tag = "2")]
    pub list_id: u32,
    #[prost(string, tag = "3")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub comments: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub due_date: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "6")]
    pub labels: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(bool, tag = "7")]
    pub done: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateTodoListRequest {
    #[prost(string, tag = "1")]
    pub title: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateTodoListReply {
    #[prost(message, optional, tag = "1")]
    pub todo_list: ::core::option::Option<TodoList>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAllTodoListsReply {
    #[prost(message, repeated, tag = "1")]
    pub todo_lists: ::prost::alloc::vec::Vec<TodoList>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTodoListRequest {
    #[prost(uint32, tag = "1")]
    pub id: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTodoListReply {
    #[prost(message, optional, tag = "1")]
    pub todo_list: ::core::option::Option<TodoList>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateTodoListRequest {
    #[prost(message, optional, tag = "1")]
    pub todo_list: ::core::option::Option<TodoList>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteTodoListRequest {
    #[prost(uint32, tag = "1")]
    pub id: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateTodoRequest {
    #[prost(uint32, tag = "1")]
    pub list_id: u32,
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub comments: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub due_date: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "5")]
    pub labels: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(bool, tag = "6")]
    pub done: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateTodoReply {
    #[prost(message, optional, tag = "1")]
    pub todo: ::core::option::Option<Todo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTodoRequest {
    #[prost(uint32, tag = "1")]
    pub id: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTodoReply {
    #[prost(message, optional, tag = "1")]
    pub todo: ::core::option::Option<Todo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTodosByListRequest {
    #[prost(uint32, tag = "1")]
    pub list_id: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTodosByListReply {
    #[prost(message, repeated, tag = "1")]
    pub todos: ::prost::alloc::vec::Vec<Todo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateTodoRequest {
    #[prost(message, optional, tag = "1")]
    pub todo: ::core::option::Option<Todo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteTodoRequest {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(uint32, tag = "2")]
    pub list_id: u32,
}

pub mod todoer_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct TodoerClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl TodoerClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> TodoerClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
        <T::ResponseBody as Body>::Data: Into<Bytes> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn create_todo_list(
            &mut self,
            request: impl tonic::IntoRequest<super::CreateTodoListRequest>,
        ) -> Result<tonic::Response<super::CreateTodoListReply>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/todoer.v1.Todoer/CreateTodoList",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn get_all_todo_lists(
            &mut self,
            request: impl tonic::IntoRequest<super::Empty>,
        ) -> Result<tonic::Response<super::GetAllTodoListsReply>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/todoer.v1.Todoer/GetAllTodoLists",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn get_todo_list(
            &mut self,
            request: impl tonic::IntoRequest<super::GetTodoListRequest>,
        ) -> Result<tonic::Response<super::GetTodoListReply>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/todoer.v1.Todoer/GetTodoList",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn update_todo_list(
            &mut self,
            request: impl tonic::IntoRequest<super::UpdateTodoListRequest>,
        ) -> Result<tonic::Response<super::Empty>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/todoer.v1.Todoer/UpdateTodoList",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn delete_todo_list(
            &mut self,
            request: impl tonic::IntoRequest<super::DeleteTodoListRequest>,
        ) -> Result<tonic::Response<super::Empty>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/todoer.v1.Todoer/DeleteTodoList",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn create_todo(
            &mut self,
            request: impl tonic::IntoRequest<super::CreateTodoRequest>,
        ) -> Result<tonic::Response<super::CreateTodoReply>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/todoer.v1.Todoer/CreateTodo",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn get_todo(
            &mut self,
            request: impl tonic::IntoRequest<super::GetTodoRequest>,
        ) -> Result<tonic::Response<super::GetTodoReply>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                tonic::codegen::http::uri::PathAndQuery::from_static("/todoer.v1.Todoer/GetTodo");
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn get_todos_by_list(
            &mut self,
            request: impl tonic::IntoRequest<super::GetTodosByListRequest>,
        ) -> Result<tonic::Response<super::GetTodosByListReply>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/todoer.v1.Todoer/GetTodosByList",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn update_todo(
            &mut self,
            request: impl tonic::IntoRequest<super::UpdateTodoRequest>,
        ) -> Result<tonic::Response<super::Empty>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/todoer.v1.Todoer/UpdateTodo",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn delete_todo(
            &mut self,
            request: impl tonic::IntoRequest<super::DeleteTodoRequest>,
        ) -> Result<tonic::Response<super::Empty>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/todoer.v1.Todoer/DeleteTodo",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

pub mod todoer_server {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[tonic::async_trait]
    pub trait Todoer: Send + Sync + 'static {
        async fn create_todo_list(
            &self,
            request: tonic::Request<super::CreateTodoListRequest>,
        ) -> Result<tonic::Response<super::CreateTodoListReply>, tonic::Status>;
        async fn get_all_todo_lists(
            &self,
            request: tonic::Request<super::Empty>,
        ) -> Result<tonic::Response<super::GetAllTodoListsReply>, tonic::Status>;
        async fn get_todo_list(
            &self,
            request: tonic::Request<super::GetTodoListRequest>,
        ) -> Result<tonic::Response<super::GetTodoListReply>, tonic::Status>;
        async fn update_todo_list(
            &self,
            request: tonic::Request<super::UpdateTodoListRequest>,
        ) -> Result<tonic::Response<super::Empty>, tonic::Status>;
        async fn delete_todo_list(
            &self,
            request: tonic::Request<super::DeleteTodoListRequest>,
        ) -> Result<tonic::Response<super::Empty>, tonic::Status>;
        async fn create_todo(
            &self,
            request: tonic::Request<super::CreateTodoRequest>,
        ) -> Result<tonic::Response<super::CreateTodoReply>, tonic::Status>;
        async fn get_todo(
            &self,
            request: tonic::Request<super::GetTodoRequest>,
        ) -> Result<tonic::Response<super::GetTodoReply>, tonic::Status>;
        async fn get_todos_by_list(
            &self,
            request: tonic::Request<super::GetTodosByListRequest>,
        ) -> Result<tonic::Response<super::GetTodosByListReply>, tonic::Status>;
        async fn update_todo(
            &self,
            request: tonic::Request<super::UpdateTodoRequest>,
        ) -> Result<tonic::Response<super::Empty>, tonic::Status>;
        async fn delete_todo(
            &self,
            request: tonic::Request<super::DeleteTodoRequest>,
        ) -> Result<tonic::Response<super::Empty>, tonic::Status>;
    }

    #[derive(Debug, Clone)]
    pub struct TodoerServer<T: Todoer> {
        inner: Arc<T>,
    }

    impl<T: Todoer> TodoerServer<T> {
        pub fn new(inner: T) -> Self {
            Self {
                inner: Arc::new(inner),
            }
        }
    }

    impl<T: Todoer> Service<http::Request<tonic::body::BoxBody>> for TodoerServer<T> {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<tonic::body::BoxBody>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/todoer.v1.Todoer/CreateTodoList" => {
                    struct CreateTodoListSvc<T: Todoer>(pub Arc<T>);
                    impl<T: Todoer> tonic::server::UnaryService<super::CreateTodoListRequest>
                        for CreateTodoListSvc<T>
                    {
                        type Response = super::CreateTodoListReply;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CreateTodoListRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.create_todo_list(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = CreateTodoListSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/todoer.v1.Todoer/GetAllTodoLists" => {
                    struct GetAllTodoListsSvc<T: Todoer>(pub Arc<T>);
                    impl<T: Todoer> tonic::server::UnaryService<super::Empty> for GetAllTodoListsSvc<T> {
                        type Response = super::GetAllTodoListsReply;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(&mut self, request: tonic::Request<super::Empty>) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_all_todo_lists(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetAllTodoListsSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/todoer.v1.Todoer/GetTodoList" => {
                    struct GetTodoListSvc<T: Todoer>(pub Arc<T>);
                    impl<T: Todoer> tonic::server::UnaryService<super::GetTodoListRequest> for GetTodoListSvc<T> {
                        type Response = super::GetTodoListReply;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetTodoListRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_todo_list(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetTodoListSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/todoer.v1.Todoer/UpdateTodoList" => {
                    struct UpdateTodoListSvc<T: Todoer>(pub Arc<T>);
                    impl<T: Todoer> tonic::server::UnaryService<super::UpdateTodoListRequest>
                        for UpdateTodoListSvc<T>
                    {
                        type Response = super::Empty;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::UpdateTodoListRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.update_todo_list(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = UpdateTodoListSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/todoer.v1.Todoer/DeleteTodoList" => {
                    struct DeleteTodoListSvc<T: Todoer>(pub Arc<T>);
                    impl<T: Todoer> tonic::server::UnaryService<super::DeleteTodoListRequest>
                        for DeleteTodoListSvc<T>
                    {
                        type Response = super::Empty;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DeleteTodoListRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.delete_todo_list(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = DeleteTodoListSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/todoer.v1.Todoer/CreateTodo" => {
                    struct CreateTodoSvc<T: Todoer>(pub Arc<T>);
                    impl<T: Todoer> tonic::server::UnaryService<super::CreateTodoRequest> for CreateTodoSvc<T> {
                        type Response = super::CreateTodoReply;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CreateTodoRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.create_todo(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = CreateTodoSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/todoer.v1.Todoer/GetTodo" => {
                    struct GetTodoSvc<T: Todoer>(pub Arc<T>);
                    impl<T: Todoer> tonic::server::UnaryService<super::GetTodoRequest> for GetTodoSvc<T> {
                        type Response = super::GetTodoReply;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetTodoRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_todo(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetTodoSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/todoer.v1.Todoer/GetTodosByList" => {
                    struct GetTodosByListSvc<T: Todoer>(pub Arc<T>);
                    impl<T: Todoer> tonic::server::UnaryService<super::GetTodosByListRequest>
                        for GetTodosByListSvc<T>
                    {
                        type Response = super::GetTodosByListReply;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetTodosByListRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_todos_by_list(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetTodosByListSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/todoer.v1.Todoer/UpdateTodo" => {
                    struct UpdateTodoSvc<T: Todoer>(pub Arc<T>);
                    impl<T: Todoer> tonic::server::UnaryService<super::UpdateTodoRequest> for UpdateTodoSvc<T> {
                        type Response = super::Empty;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::UpdateTodoRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.update_todo(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = UpdateTodoSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/todoer.v1.Todoer/DeleteTodo" => {
                    struct DeleteTodoSvc<T: Todoer>(pub Arc<T>);
                    impl<T: Todoer> tonic::server::UnaryService<super::DeleteTodoRequest> for DeleteTodoSvc<T> {
                        type Response = super::Empty;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::DeleteTodoRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.delete_todo(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = DeleteTodoSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::empty_body())
                        .unwrap())
                }),
            }
        }
    }

    impl<T: Todoer> tonic::server::NamedService for TodoerServer<T> {
        const NAME: &'static str = "todoer.v1.Todoer";
    }
}
